use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME};
use nimbus_core::Error;
use std::fmt;
use std::str::FromStr;

/// Regions with a dedicated service endpoint.
///
/// The region→host table is static; anything else resolves to the global
/// default endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// eu-west-1
    EuWest1,
    /// us-east-1
    UsEast1,
    /// us-west-1
    UsWest1,
}

impl Region {
    /// The endpoint host serving this region.
    pub fn host(&self) -> &'static str {
        match self {
            Region::EuWest1 => "ec2.eu-west-1.amazonaws.com",
            Region::UsEast1 => "ec2.us-east-1.amazonaws.com",
            Region::UsWest1 => "ec2.us-west-1.amazonaws.com",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::EuWest1 => write!(f, "eu-west-1"),
            Region::UsEast1 => write!(f, "us-east-1"),
            Region::UsWest1 => write!(f, "us-west-1"),
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eu-west-1" => Ok(Region::EuWest1),
            "us-east-1" => Ok(Region::UsEast1),
            "us-west-1" => Ok(Region::UsWest1),
            other => Err(Error::config_invalid(format!("unknown region: {other}"))),
        }
    }
}

/// The resolved target of every request a client sends.
///
/// Derived once at construction and never recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host the request is sent to and signed against.
    pub host: String,
    /// TCP port, 443 unless overridden.
    pub port: u16,
    /// URI scheme, "https" unless overridden.
    pub scheme: String,
}

impl Endpoint {
    /// Resolve the endpoint from an optional explicit host, an optional
    /// region, and optional port/scheme overrides.
    ///
    /// An explicit host always wins over region-derived resolution; an
    /// absent region falls back to the global default host.
    pub fn resolve(
        host: Option<&str>,
        region: Option<Region>,
        port: Option<u16>,
        scheme: Option<&str>,
    ) -> Self {
        let host = match (host, region) {
            (Some(h), _) => h.to_string(),
            (None, Some(r)) => r.host().to_string(),
            (None, None) => DEFAULT_HOST.to_string(),
        };

        Endpoint {
            host,
            port: port.unwrap_or(DEFAULT_PORT),
            scheme: scheme.unwrap_or(DEFAULT_SCHEME).to_string(),
        }
    }

    /// The request URI. The signature base path for this API family is
    /// always `/`, and so is the request path.
    pub fn uri(&self) -> String {
        format!("{}://{}:{}/", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_region_resolves_to_default() {
        let ep = Endpoint::resolve(None, None, None, None);
        assert_eq!(ep.host, "ec2.amazonaws.com");
        assert_eq!(ep.port, 443);
        assert_eq!(ep.scheme, "https");
    }

    #[test]
    fn test_region_table() {
        for (name, host) in [
            ("eu-west-1", "ec2.eu-west-1.amazonaws.com"),
            ("us-east-1", "ec2.us-east-1.amazonaws.com"),
            ("us-west-1", "ec2.us-west-1.amazonaws.com"),
        ] {
            let region: Region = name.parse().unwrap();
            assert_eq!(region.host(), host);
            assert_eq!(region.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        assert!("mars-north-1".parse::<Region>().is_err());
    }

    #[test]
    fn test_explicit_host_overrides_region() {
        let ep = Endpoint::resolve(
            Some("compute.internal.test"),
            Some(Region::EuWest1),
            Some(8443),
            Some("http"),
        );
        assert_eq!(ep.host, "compute.internal.test");
        assert_eq!(ep.uri(), "http://compute.internal.test:8443/");
    }
}
