//! Signature computation over the canonical parameter string.
//!
//! Pure functions of their inputs plus the secret key; signing the same
//! (method, host, path, parameter set) twice always yields the same
//! signature.

use crate::canonical::percent_encode;
use http::Method;
use nimbus_core::hash::base64_hmac_sha256;

/// Construct the signature base string.
///
/// `METHOD\nHOST\nPATH\n` followed by the canonical parameter string, with
/// no trailing newline after the canonical part.
pub fn string_to_sign(method: &Method, host: &str, path: &str, canonical: &str) -> String {
    format!("{method}\n{host}\n{path}\n{canonical}")
}

/// Compute the transport-ready signature for a base string.
///
/// Base64 of the raw HMAC-SHA256 digest, percent-encoded with the same
/// strict set as every other value.
pub fn signature(secret_key: &str, string_to_sign: &str) -> String {
    percent_encode(&base64_hmac_sha256(
        secret_key.as_bytes(),
        string_to_sign.as_bytes(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_string_layout() {
        let sts = string_to_sign(
            &Method::POST,
            "ec2.amazonaws.com",
            "/",
            "A=1&Action=DescribeX&B=2",
        );
        assert_eq!(sts, "POST\nec2.amazonaws.com\n/\nA=1&Action=DescribeX&B=2");
        assert!(!sts.ends_with('\n'));
    }

    #[test]
    fn test_signature_known_vector() {
        // base64(HMAC-SHA256("SK", base)) == "XuM21OBj/FjzmBJ+LIDlaDFle/Otoy6cb4jVS8LYa5k=",
        // verified against an independent implementation; '/', '+' and '='
        // must come out percent-encoded.
        let sts = string_to_sign(
            &Method::POST,
            "ec2.amazonaws.com",
            "/",
            "A=1&Action=DescribeX&B=2",
        );
        assert_eq!(
            signature("SK", &sts),
            "XuM21OBj%2FFjzmBJ%2BLIDlaDFle%2FOtoy6cb4jVS8LYa5k%3D"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let sts = string_to_sign(&Method::POST, "host", "/", "A=1");
        assert_eq!(signature("secret", &sts), signature("secret", &sts));
    }

    #[test]
    fn test_signature_depends_on_every_base_component() {
        let base = string_to_sign(&Method::POST, "host", "/", "A=1");
        assert_ne!(
            signature("secret", &base),
            signature("secret", &string_to_sign(&Method::POST, "other", "/", "A=1"))
        );
        assert_ne!(
            signature("secret", &base),
            signature("secret", &string_to_sign(&Method::POST, "host", "/", "A=2"))
        );
        assert_ne!(signature("secret", &base), signature("other", &base));
    }
}
