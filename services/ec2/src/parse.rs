use nimbus_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// The capability an operation builder supplies to interpret a response
/// body: consume the raw bytes, produce a typed result.
///
/// Opaque to the dispatcher; it only feeds the collected body through.
/// Failures here are parse errors, kept distinct from protocol errors so
/// callers can tell "server rejected the request" from "we misread a
/// successful response".
pub trait ParseResponse: Send + Sync {
    /// The typed result this parser produces.
    type Output;

    /// Parse a response body.
    fn parse_response(&self, body: &[u8]) -> Result<Self::Output>;
}

/// Parses an XML response body into `T` via serde.
pub struct XmlParser<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> XmlParser<T> {
    /// Create a parser for `T`.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for XmlParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for XmlParser<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("XmlParser")
    }
}

impl<T: DeserializeOwned + Send + Sync> ParseResponse for XmlParser<T> {
    type Output = T;

    fn parse_response(&self, body: &[u8]) -> Result<T> {
        let text = std::str::from_utf8(body)
            .map_err(|e| Error::parse("response body is not valid UTF-8").with_source(e))?;
        quick_xml::de::from_str(text).map_err(|e| {
            Error::parse(format!("response body did not match expected structure: {e}"))
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::ErrorKind;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct ConsoleOutput {
        instance_id: String,
        output: String,
    }

    #[test]
    fn test_parses_well_formed_xml() {
        let body = b"<GetConsoleOutputResponse>\
            <instanceId>i-123</instanceId>\
            <output>aGVsbG8=</output>\
            </GetConsoleOutputResponse>";

        let parser = XmlParser::<ConsoleOutput>::new();
        let parsed = parser.parse_response(body).unwrap();
        assert_eq!(
            parsed,
            ConsoleOutput {
                instance_id: "i-123".to_string(),
                output: "aGVsbG8=".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_body_is_a_parse_error() {
        let parser = XmlParser::<ConsoleOutput>::new();
        let err = parser.parse_response(b"<unclosed>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
