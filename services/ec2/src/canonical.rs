//! Deterministic serialization of a parameter set into the byte string the
//! signature is computed over.
//!
//! The receiving service recomputes this string independently, so any
//! deviation in ordering or escaping invalidates the request. Sorting is
//! byte-lexicographic on parameter names, never locale-aware.

use crate::constants::QUERY_ENCODE_SET;
use percent_encoding::utf8_percent_encode;

/// Percent-encode a value with the strict RFC 3986 set.
///
/// Spaces become `%20`, unreserved characters (including `~`) stay literal.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, &QUERY_ENCODE_SET).to_string()
}

/// Build the canonical query string over the given (name, value) entries.
///
/// Entries are sorted by name, rendered as `name=percent_encoded(value)`,
/// and joined with `&` with no trailing separator. The result is the
/// signing input only; the transmitted body reuses the same encoded pairs
/// with the signature appended.
pub fn canonical_query_string(entries: &[(String, String)]) -> String {
    let mut entries: Vec<&(String, String)> = entries.iter().collect();
    entries.sort();

    entries
        .iter()
        .map(|(k, v)| format!("{k}={}", percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
