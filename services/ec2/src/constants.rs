use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Fixed protocol parameters merged into every signed request.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";
pub const SIGNATURE_VERSION: &str = "2";
pub const API_VERSION: &str = "2009-11-30";

pub const DEFAULT_HOST: &str = "ec2.amazonaws.com";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_SCHEME: &str = "https";

/// AsciiSet for strict RFC 3986 percent-encoding.
///
/// Everything except unreserved characters ('A'-'Z', 'a'-'z', '0'-'9',
/// '-', '.', '_', '~') is escaped. A space therefore encodes as `%20`,
/// never `+`: the signing scheme recomputes the canonical string on the
/// server side with strict encoding, and form-style `+` would invalidate
/// the signature.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
