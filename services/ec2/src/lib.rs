//! EC2-style Query API client: canonicalization, SigV2 signing, and
//! dispatch, with interchangeable real and mock backends.
//!
//! Operation-level request builders assemble an [`OperationRequest`] and
//! hand it to a [`Client`]; whether the client signs and transmits over the
//! network or serves from an in-memory store is decided once, at
//! construction.

#![warn(missing_docs)]

mod canonical;
pub use canonical::canonical_query_string;
pub use canonical::percent_encode;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod constants;

mod credential;
pub use credential::Credential;

mod dispatch;
pub use dispatch::{ApiResponse, RealDispatcher};

mod endpoint;
pub use endpoint::{Endpoint, Region};

mod mock;
pub use mock::{MockDispatcher, MockHandler, MockState, Record, RESOURCE_CATEGORIES};

mod params;
pub use params::{OperationRequest, RequestParams};

mod parse;
pub use parse::{ParseResponse, XmlParser};

mod sign;
pub use sign::{signature, string_to_sign};
