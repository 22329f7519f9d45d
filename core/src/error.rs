use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The error type shared by every nimbus operation.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration is unusable (missing credentials, invalid values).
    ///
    /// Raised at client construction, before any network or crypto
    /// resource is touched. Never retryable.
    ConfigInvalid,

    /// Connection-level failure: DNS, TCP, TLS, timeout.
    ///
    /// The caller decides whether to retry, guided by the operation's
    /// idempotency flag.
    Transport,

    /// The connection succeeded but the service answered with an
    /// unexpected HTTP status. Carries the status and a body excerpt.
    Protocol,

    /// The response body did not match the structure the supplied parser
    /// expected. Distinct from [`ErrorKind::Protocol`] so callers can tell
    /// "server rejected the request" from "we misread a successful response".
    Parse,

    /// A mock dispatch hit an action with no registered handler.
    NotImplemented,

    /// Everything else.
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the upstream HTTP status this error was produced from.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The upstream HTTP status, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a protocol error carrying the unexpected status.
    pub fn protocol(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Protocol, message).with_status(status)
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Create a not implemented error.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, message)
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Transport => write!(f, "transport failure"),
            ErrorKind::Protocol => write!(f, "unexpected response status"),
            ErrorKind::Parse => write!(f, "unparsable response"),
            ErrorKind::NotImplemented => write!(f, "mock not implemented"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::parse(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
