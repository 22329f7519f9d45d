//! Core components shared by every nimbus service client.
//!
//! This crate holds the pieces that are independent of any particular cloud
//! API: the error taxonomy, the I/O [`Context`] with its pluggable
//! [`HttpSend`] transport, and the hashing and time helpers signature
//! computation is built from.
//!
//! ## Overview
//!
//! - **Context**: container for the HTTP transport a dispatcher sends
//!   requests through. Service crates never talk to the network directly;
//!   they hand an `http::Request` to the context and get the collected
//!   response back. Swapping the transport is how tests script responses
//!   without a server.
//! - **Error**: one error type for the whole workspace, with a small fixed
//!   set of kinds (`ConfigInvalid`, `Transport`, `Protocol`, `Parse`, ...)
//!   so callers can branch on what failed rather than on message text.
//! - **hash / time / utils**: HMAC-SHA256 + base64 helpers, canonical
//!   timestamp formatting, and credential redaction for Debug output.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::HttpSend;
pub use context::NoopHttpSend;

mod error;
pub use error::{Error, ErrorKind, Result};
