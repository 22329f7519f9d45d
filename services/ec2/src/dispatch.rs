use crate::canonical::canonical_query_string;
use crate::constants::{API_VERSION, SIGNATURE_METHOD, SIGNATURE_VERSION};
use crate::sign::{signature, string_to_sign};
use crate::{Credential, Endpoint, OperationRequest};
use bytes::Bytes;
use http::{header, Method, StatusCode};
use log::debug;
use nimbus_core::time::{format_timestamp, now, DateTime};
use nimbus_core::{Context, Error, Result};

/// Maximum number of response-body bytes quoted in a protocol error.
const BODY_EXCERPT_LEN: usize = 256;

/// A collected wire response: the status and the raw body bytes.
///
/// Mock handlers produce the same shape, so a parser cannot tell which
/// backend a response came from.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Bytes,
}

impl ApiResponse {
    /// A successful response around the given body, the shape mock
    /// handlers emulate.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }
}

/// The network backend: canonicalizes, signs, and transmits each request.
///
/// Holds no mutable state; the credential and endpoint are read-only after
/// construction and safe for concurrent use by multiple requests.
#[derive(Debug)]
pub struct RealDispatcher {
    ctx: Context,
    credential: Credential,
    endpoint: Endpoint,
}

impl RealDispatcher {
    pub(crate) fn new(ctx: Context, credential: Credential, endpoint: Endpoint) -> Self {
        Self {
            ctx,
            credential,
            endpoint,
        }
    }

    /// Sign and transmit one request, expecting a 200 response.
    ///
    /// Network-level failures surface as transport errors; any non-200
    /// status becomes a protocol error carrying the status and a body
    /// excerpt. No retries happen here: `idempotent` is advisory metadata
    /// for the caller's retry policy.
    pub async fn dispatch(&self, req: &OperationRequest) -> Result<ApiResponse> {
        let body = signed_body(&self.credential, &self.endpoint, req, now());
        debug!(
            "dispatching {} to {} (idempotent: {})",
            req.action,
            self.endpoint.host,
            req.idempotent
        );

        let http_req = http::Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.uri())
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Bytes::from(body))?;

        let resp = self.ctx.http_send(http_req).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let excerpt = String::from_utf8_lossy(
                &resp.body()[..resp.body().len().min(BODY_EXCERPT_LEN)],
            )
            .into_owned();
            return Err(Error::protocol(
                status,
                format!("{} returned {status}: {excerpt}", req.action),
            ));
        }

        debug!("{} succeeded with {status}", req.action);
        Ok(ApiResponse {
            status,
            body: resp.into_body(),
        })
    }
}

/// Build the literal request body: merged parameters, canonicalized,
/// signed, with the signature appended as the final parameter.
///
/// Pure function of its inputs; the timestamp is the only per-request
/// value, merged into the signed set before canonicalization so it
/// participates in the signature. Fixed protocol parameters override
/// caller-supplied entries of the same name.
fn signed_body(
    credential: &Credential,
    endpoint: &Endpoint,
    req: &OperationRequest,
    time: DateTime,
) -> String {
    let mut entries = req.params.present();
    let fixed = [
        ("Action", req.action.clone()),
        ("AWSAccessKeyId", credential.access_key_id.clone()),
        ("SignatureMethod", SIGNATURE_METHOD.to_string()),
        ("SignatureVersion", SIGNATURE_VERSION.to_string()),
        ("Timestamp", format_timestamp(time)),
        ("Version", API_VERSION.to_string()),
    ];
    entries.retain(|(k, _)| !fixed.iter().any(|(name, _)| name == k));
    entries.extend(fixed.map(|(k, v)| (k.to_string(), v)));

    let canonical = canonical_query_string(&entries);
    let sts = string_to_sign(&Method::POST, &endpoint.host, "/", &canonical);
    debug!("string to sign:\n{sts}");

    let sig = signature(&credential.secret_key, &sts);
    format!("{canonical}&Signature={sig}")
}
