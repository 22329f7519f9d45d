//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! This is the transport real-mode clients are expected to run on. The
//! wrapped [`reqwest::Client`] pools connections internally; that stays an
//! implementation detail of this crate and never leaks into the dispatch
//! contract.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use nimbus_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// Sends requests through a shared [`reqwest::Client`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend around an existing client, keeping its
    /// timeout and TLS configuration.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::transport("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
