//! Client configuration: regions, endpoints, timeouts and signing material.
//!
//! A [`ConfigurationProvider`] supplies the pieces that vary per principal
//! (region, key id, raw signature operation); [`Config`] carries everything
//! the transport stack needs to be built. Most callers construct a
//! [`VirtualNetwork`](crate::api::VirtualNetwork) directly from a provider
//! and never touch [`Config`] themselves.
mod region;

use std::{fmt, sync::Arc, time::Duration};

use secrecy::SecretString;

use crate::{client::AuthError, error::ConfigError};

pub use region::Region;

/// Supplies the per-principal material the client cannot invent: the home
/// region, the signing key identity, and the raw signature operation.
///
/// The crate assembles the signing string itself (see [`crate::client`]); the
/// asymmetric-key primitive stays behind this trait so key handling,
/// rotation, and hardware-backed keys remain the caller's concern.
pub trait ConfigurationProvider: Send + Sync {
    /// The region API calls should be routed to.
    fn region(&self) -> Result<Region, ConfigError>;

    /// Identity of the signing key, placed verbatim in the `keyId` field of
    /// the authorization header.
    fn key_id(&self) -> Result<String, ConfigError>;

    /// Produce the raw RSA-SHA256 signature over `message`.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, AuthError>;
}

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration object detailing the endpoint, timeouts, and signing
/// material used to build a [`Client`](crate::Client).
#[derive(Clone)]
pub struct Config {
    /// Base URL all request paths are joined onto.
    pub endpoint: http::Uri,
    /// The region the endpoint was derived from, when known.
    pub region: Option<Region>,
    /// TCP connect timeout. `None` means no timeout.
    pub connect_timeout: Option<Duration>,
    /// Socket read timeout. `None` means no timeout.
    pub read_timeout: Option<Duration>,
    /// Socket write timeout. `None` means no timeout.
    pub write_timeout: Option<Duration>,
    /// Delegation token attached to every request in on-behalf-of mode.
    pub delegation_token: Option<SecretString>,
    /// Provider used by the signing layer; requests go out unsigned when
    /// absent (useful against local mocks).
    pub(crate) provider: Option<Arc<dyn ConfigurationProvider>>,
}

impl Config {
    /// Construct a new config pointing at `endpoint`, with default timeouts
    /// and no signing material.
    pub fn new(endpoint: http::Uri) -> Self {
        Self {
            endpoint,
            region: None,
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            write_timeout: None,
            delegation_token: None,
            provider: None,
        }
    }

    /// Derive a config from a provider's region using a service endpoint
    /// template; the provider is retained for request signing.
    pub fn from_provider(
        provider: Arc<dyn ConfigurationProvider>,
        endpoint_template: &str,
    ) -> Result<Self, ConfigError> {
        let region = provider.region()?;
        let endpoint = region.endpoint(endpoint_template)?;
        let mut config = Self::new(endpoint);
        config.region = Some(region);
        config.provider = Some(provider);
        Ok(config)
    }

    /// The provider this config was built from, when there is one.
    pub fn provider(&self) -> Option<&Arc<dyn ConfigurationProvider>> {
        self.provider.as_ref()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("write_timeout", &self.write_timeout)
            .field("delegation_token", &self.delegation_token.as_ref().map(|_| "***"))
            .field("signed", &self.provider.is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug)]
    struct FixedProvider(&'static str);

    impl ConfigurationProvider for FixedProvider {
        fn region(&self) -> Result<Region, ConfigError> {
            Region::new(self.0)
        }

        fn key_id(&self) -> Result<String, ConfigError> {
            Ok("tenancy/user/fingerprint".into())
        }

        fn sign(&self, _message: &[u8]) -> Result<Vec<u8>, AuthError> {
            Ok(vec![0xAB])
        }
    }

    #[test]
    fn config_from_provider_resolves_endpoint() {
        let provider = Arc::new(FixedProvider("eu-frankfurt-1"));
        let config =
            Config::from_provider(provider, "https://iaas.{region}.{secondLevelDomain}").unwrap();
        assert_eq!(
            config.endpoint.to_string(),
            "https://iaas.eu-frankfurt-1.oraclecloud.com/"
        );
        assert_eq!(config.region.as_ref().unwrap().id(), "eu-frankfurt-1");
        assert!(config.provider().is_some());
    }

    #[test]
    fn config_from_provider_rejects_bad_region() {
        let provider = Arc::new(FixedProvider(""));
        let err = Config::from_provider(provider, "https://iaas.{region}.{secondLevelDomain}")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegion(_)));
    }

    #[test]
    fn debug_does_not_leak_delegation_token() {
        let mut config = Config::new(http::Uri::from_static("https://iaas.example.com"));
        config.delegation_token = Some(SecretString::from("very-secret".to_string()));
        let printed = format!("{config:?}");
        assert!(!printed.contains("very-secret"));
    }
}
