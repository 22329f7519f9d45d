//! EC2-style Query API support with convenience constructors.

pub use nimbus_ec2::*;

#[cfg(feature = "default-context")]
use nimbus_core::Context;
#[cfg(feature = "default-context")]
use nimbus_http_send_reqwest::ReqwestHttpSend;

/// Create a client wired to the default reqwest transport.
///
/// A mock-mode config still gets the in-memory backend; the transport is
/// simply never used. For a custom transport, build a
/// [`Context`](nimbus_core::Context) yourself and call [`Client::new`].
///
/// # Example
///
/// ```no_run
/// # fn main() -> nimbus_core::Result<()> {
/// use nimbus::ec2::Config;
///
/// let client = nimbus::ec2::default_client(Config {
///     access_key_id: Some("AKIA...".to_string()),
///     secret_key: Some("...".to_string()),
///     ..Default::default()
/// })?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client(config: Config) -> nimbus_core::Result<Client> {
    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    Client::new(config, ctx)
}
