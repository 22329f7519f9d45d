use crate::{ApiResponse, Config, MockDispatcher, OperationRequest, ParseResponse, RealDispatcher};
use nimbus_core::{Context, Result};

/// A client for the Query API: either the network backend or the
/// in-memory mock, behind one call surface.
///
/// Which backend you get is decided once, at construction, by
/// [`Config::mock`]; toggling the flag in a later `Config` never affects a
/// client that already exists. Operation builders call [`Client::dispatch`]
/// or [`Client::request`] and cannot observe which variant they run
/// against.
#[derive(Debug)]
pub enum Client {
    /// Signs and transmits over the network.
    Real(RealDispatcher),
    /// Serves from the in-memory store.
    Mock(MockDispatcher),
}

impl Client {
    /// Construct a client from configuration.
    ///
    /// Credentials are validated first, in both modes, before any other
    /// resource is allocated. The context's HTTP transport is only used by
    /// the real backend.
    pub fn new(config: Config, ctx: Context) -> Result<Self> {
        let credential = config.credential()?;

        if config.mock {
            Ok(Client::Mock(MockDispatcher::new()))
        } else {
            let endpoint = config.endpoint();
            Ok(Client::Real(RealDispatcher::new(ctx, credential, endpoint)))
        }
    }

    /// Issue one request and return the raw response.
    pub async fn dispatch(&self, req: &OperationRequest) -> Result<ApiResponse> {
        match self {
            Client::Real(real) => real.dispatch(req).await,
            Client::Mock(mock) => mock.dispatch(req),
        }
    }

    /// Issue one request and feed the response body through `parser`.
    pub async fn request<P: ParseResponse>(
        &self,
        req: &OperationRequest,
        parser: &P,
    ) -> Result<P::Output> {
        let resp = self.dispatch(req).await?;
        parser.parse_response(&resp.body)
    }

    /// The mock backend, if this client is one. Used by tests and mock
    /// handler registration.
    pub fn as_mock(&self) -> Option<&MockDispatcher> {
        match self {
            Client::Mock(mock) => Some(mock),
            Client::Real(_) => None,
        }
    }

    /// Mutable access to the mock backend, if this client is one.
    pub fn as_mock_mut(&mut self) -> Option<&mut MockDispatcher> {
        match self {
            Client::Mock(mock) => Some(mock),
            Client::Real(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::ErrorKind;

    fn test_config(mock: bool) -> Config {
        Config {
            access_key_id: Some("AK".to_string()),
            secret_key: Some("SK".to_string()),
            mock,
            ..Default::default()
        }
    }

    #[test]
    fn test_factory_selects_backend_from_config() {
        let real = Client::new(test_config(false), Context::new()).unwrap();
        assert!(real.as_mock().is_none());

        let mock = Client::new(test_config(true), Context::new()).unwrap();
        assert!(mock.as_mock().is_some());
    }

    #[test]
    fn test_both_backends_validate_credentials() {
        for mock in [false, true] {
            let config = Config {
                mock,
                ..Default::default()
            };
            let err = Client::new(config, Context::new()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        }
    }
}
