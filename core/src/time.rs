//! Time related utils.

use chrono::Utc;

/// The timestamp type used across nimbus.
pub type DateTime = chrono::DateTime<Utc>;

/// The current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a timestamp the way the Query API signs it: `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Second precision, always UTC, always the literal `Z` suffix. This value
/// participates in the signature, so both sides must render it identically.
pub fn format_timestamp(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
