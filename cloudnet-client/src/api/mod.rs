//! Typed service client for the virtual-networking API.
//!
//! [`VirtualNetwork`] exposes one async method per REST operation. Every
//! method follows the same shape: pick the effective retry policy, inject an
//! idempotency token where the operation requires one, build the request
//! through [`cloudnet_core::Request`], dispatch it through the client's
//! retry harness, and decode the answer into an [`ApiResponse`].
use std::sync::Arc;

use bytes::Bytes;
use http::{header::HeaderName, HeaderMap, HeaderValue, StatusCode};
use secrecy::SecretString;
use serde::de::DeserializeOwned;

use cloudnet_core::headers;

use crate::{
    client::{is_service_enabled, ClientBuilder, RetryPolicy},
    config::{ConfigurationProvider, Region},
    error::ErrorResponse,
    Client, Config, ConfigError, Error, Result, ServiceError,
};

mod cpe;
mod cross_connect;
mod internet_gateway;
mod nat_gateway;
mod remote_peering_connection;
mod route_table;
mod security_list;
mod subnet;
mod vcn;
mod virtual_circuit;

pub use cpe::{CreateCpeRequest, DeleteCpeRequest, GetCpeRequest, ListCpesRequest, UpdateCpeRequest};
pub use cross_connect::{
    CreateCrossConnectRequest, DeleteCrossConnectRequest, GetCrossConnectRequest,
    ListCrossConnectsRequest, UpdateCrossConnectRequest,
};
pub use internet_gateway::{
    CreateInternetGatewayRequest, DeleteInternetGatewayRequest, GetInternetGatewayRequest,
    ListInternetGatewaysRequest, UpdateInternetGatewayRequest,
};
pub use nat_gateway::{
    CreateNatGatewayRequest, DeleteNatGatewayRequest, GetNatGatewayRequest, ListNatGatewaysRequest,
    UpdateNatGatewayRequest,
};
pub use remote_peering_connection::{
    ConnectRemotePeeringConnectionsRequest, CreateRemotePeeringConnectionRequest,
    DeleteRemotePeeringConnectionRequest, GetRemotePeeringConnectionRequest,
    ListRemotePeeringConnectionsRequest,
};
pub use route_table::{
    CreateRouteTableRequest, DeleteRouteTableRequest, GetRouteTableRequest, ListRouteTablesRequest,
    UpdateRouteTableRequest,
};
pub use security_list::{
    CreateSecurityListRequest, DeleteSecurityListRequest, GetSecurityListRequest,
    ListSecurityListsRequest, UpdateSecurityListRequest,
};
pub use subnet::{
    CreateSubnetRequest, DeleteSubnetRequest, GetSubnetRequest, ListSubnetsRequest, UpdateSubnetRequest,
};
pub use vcn::{
    ChangeVcnCompartmentRequest, CreateVcnRequest, DeleteVcnRequest, GetVcnRequest, ListVcnsRequest,
    UpdateVcnRequest,
};
pub use virtual_circuit::{
    CreateVirtualCircuitRequest, DeleteVirtualCircuitRequest, GetVirtualCircuitRequest,
    ListVirtualCircuitsRequest, UpdateVirtualCircuitRequest,
};

/// Name of the service this client talks to, as used by the enablement map
/// and the circuit breaker.
pub const SERVICE_NAME: &str = "core";

/// Endpoint template the region is substituted into.
pub const ENDPOINT_TEMPLATE: &str = "https://iaas.{region}.{secondLevelDomain}";

/// API version segment prefixed to every operation path.
pub const BASE_PATH: &str = "/20160918";

/// Retry behavior an operation defaults to when neither the request nor the
/// client carries a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DefaultRetry {
    /// Fail on the first response.
    None,
    /// [`RetryPolicy::standard`].
    Standard,
}

/// Static metadata for one API operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    pub(crate) name: &'static str,
    pub(crate) doc_link: &'static str,
    pub(crate) retry: DefaultRetry,
}

/// A decoded API response together with its transport context.
///
/// The correlation id and full header set ride along so callers can log or
/// inspect them without another lookup.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Full response headers.
    pub headers: HeaderMap,
    /// Correlation id (`opc-request-id`) echoed by the service.
    pub request_id: Option<String>,
    /// The decoded response body.
    pub body: T,
}

impl<T> ApiResponse<T> {
    /// The resource entity tag, for `if_match` on a later update or delete.
    pub fn etag(&self) -> Option<&str> {
        self.headers
            .get(headers::ETAG)
            .and_then(|v| v.to_str().ok())
    }

    /// Opaque cursor for the next page of a list operation.
    pub fn next_page(&self) -> Option<&str> {
        self.headers
            .get(headers::NEXT_PAGE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Service client for the virtual-networking API.
///
/// Cheap to clone; clones share the transport stack and circuit breaker.
#[derive(Clone)]
pub struct VirtualNetwork {
    client: Client,
    config: Config,
    retry: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Construct a client from a configuration provider.
    ///
    /// Resolves the provider's region into the service endpoint, checks the
    /// process-wide enablement map, and builds the default transport stack.
    pub fn new(provider: Arc<dyn ConfigurationProvider>) -> Result<Self> {
        let config =
            Config::from_provider(provider, ENDPOINT_TEMPLATE).map_err(Error::Config)?;
        Self::with_config(config)
    }

    /// Like [`VirtualNetwork::new`], additionally attaching a delegation
    /// token to every request for on-behalf-of calls.
    pub fn with_delegation_token(
        provider: Arc<dyn ConfigurationProvider>,
        delegation_token: SecretString,
    ) -> Result<Self> {
        let mut config =
            Config::from_provider(provider, ENDPOINT_TEMPLATE).map_err(Error::Config)?;
        config.delegation_token = Some(delegation_token);
        Self::with_config(config)
    }

    /// Construct a client from an explicit [`Config`].
    pub fn with_config(config: Config) -> Result<Self> {
        if !is_service_enabled(SERVICE_NAME) {
            return Err(Error::Config(ConfigError::ServiceDisabled {
                service: SERVICE_NAME,
            }));
        }
        let client = ClientBuilder::try_from(config.clone())?.build();
        Ok(Self {
            client,
            config,
            retry: None,
        })
    }

    /// Construct a client over a custom [`Client`] stack, e.g. a mock
    /// transport in tests.
    pub fn with_client(client: Client, config: Config) -> Self {
        Self {
            client,
            config,
            retry: None,
        }
    }

    /// The provider this client signs with, when there is one.
    pub fn configuration_provider(&self) -> Option<&Arc<dyn ConfigurationProvider>> {
        self.config.provider()
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &http::Uri {
        &self.config.endpoint
    }

    /// Point the client at a different region.
    ///
    /// Re-derives the endpoint from the service template and rebuilds the
    /// transport stack; in-flight requests on clones are unaffected.
    pub fn set_region(&mut self, region: Region) -> Result<()> {
        let endpoint = region.endpoint(ENDPOINT_TEMPLATE).map_err(Error::Config)?;
        self.config.region = Some(region);
        self.config.endpoint = endpoint;
        self.client = ClientBuilder::try_from(self.config.clone())?.build();
        Ok(())
    }

    /// Set or clear the client-level retry policy.
    ///
    /// Takes precedence over each operation's default; a policy attached to
    /// an individual request still wins over this.
    pub fn set_retry_policy(&mut self, policy: Option<RetryPolicy>) {
        self.retry = policy;
    }

    /// Retry-policy precedence: request override, then client-level, then
    /// the operation's default.
    pub(crate) fn select_retry(
        &self,
        request_override: Option<&RetryPolicy>,
        default: DefaultRetry,
    ) -> RetryPolicy {
        if let Some(policy) = request_override {
            return policy.clone();
        }
        if let Some(policy) = &self.retry {
            return policy.clone();
        }
        match default {
            DefaultRetry::None => RetryPolicy::none(),
            DefaultRetry::Standard => RetryPolicy::standard(),
        }
    }

    /// Request builder rooted at one resource collection.
    pub(crate) fn collection(&self, path: &str) -> cloudnet_core::Request {
        cloudnet_core::Request::new(format!("{BASE_PATH}/{path}"))
    }

    /// Dispatch a built request and decode the JSON response body.
    pub(crate) async fn execute<T>(
        &self,
        op: Operation,
        mut request: http::Request<Vec<u8>>,
        policy: &RetryPolicy,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        // Feeds the otel.name field of the trace span.
        request.extensions_mut().insert(op.name);
        let (parts, bytes) = self.client.invoke(request, policy).await?;
        let request_id = header_str(&parts.headers, headers::REQUEST_ID);
        classify(&parts, &bytes, op, &request_id)?;
        let body = serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(operation = op.name, error = %source, "failed to decode response body");
            Error::Decode {
                operation: op.name,
                request_id: request_id.clone(),
                source,
            }
        })?;
        Ok(ApiResponse {
            status: parts.status,
            headers: parts.headers,
            request_id,
            body,
        })
    }

    /// Dispatch a built request for an operation with no response body.
    pub(crate) async fn execute_unit(
        &self,
        op: Operation,
        mut request: http::Request<Vec<u8>>,
        policy: &RetryPolicy,
    ) -> Result<ApiResponse<()>> {
        request.extensions_mut().insert(op.name);
        let (parts, bytes) = self.client.invoke(request, policy).await?;
        let request_id = header_str(&parts.headers, headers::REQUEST_ID);
        classify(&parts, &bytes, op, &request_id)?;
        Ok(ApiResponse {
            status: parts.status,
            headers: parts.headers,
            request_id,
            body: (),
        })
    }
}

/// Turn a non-2xx response into [`Error::Api`] with full call context.
fn classify(
    parts: &http::response::Parts,
    bytes: &Bytes,
    op: Operation,
    request_id: &Option<String>,
) -> Result<()> {
    if parts.status.is_success() {
        return Ok(());
    }
    // A malformed error body still produces something inspectable.
    let body: ErrorResponse = serde_json::from_slice(bytes).unwrap_or_else(|_| ErrorResponse {
        code: "UnknownError".into(),
        message: String::from_utf8_lossy(bytes).into_owned(),
    });
    Err(Error::Api(ServiceError {
        status: parts.status,
        code: body.code,
        message: body.message,
        operation: op.name,
        service: SERVICE_NAME,
        doc_link: op.doc_link,
        request_id: request_id.clone(),
        headers: parts.headers.clone(),
    }))
}

fn header_str(headers: &HeaderMap, name: &'static str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// The caller's idempotency token when it is non-empty, a fresh v4 UUID
/// otherwise.
pub(crate) fn retry_token(token: Option<String>) -> String {
    match token {
        Some(token) if !token.trim().is_empty() => token,
        _ => uuid::Uuid::new_v4().to_string(),
    }
}

pub(crate) fn insert_header(
    request: &mut http::Request<Vec<u8>>,
    name: &'static str,
    value: &str,
) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(|e| Error::HttpError(e.into()))?;
    request
        .headers_mut()
        .insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Serialize an operation's body, mapping failures to
/// [`Error::SerializeRequest`].
pub(crate) fn to_body<T: serde::Serialize>(details: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(details).map_err(Error::SerializeRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_token_preserves_caller_tokens() {
        assert_eq!(retry_token(Some("tok-1".into())), "tok-1");
    }

    #[test]
    fn retry_token_generates_when_absent_or_blank() {
        let generated = retry_token(None);
        assert!(uuid::Uuid::parse_str(&generated).is_ok());
        let from_blank = retry_token(Some("   ".into()));
        assert!(uuid::Uuid::parse_str(&from_blank).is_ok());
        assert_ne!(retry_token(None), retry_token(None));
    }

    #[test]
    fn endpoint_template_resolves_for_a_region() {
        let region = Region::new("ap-tokyo-1").unwrap();
        let uri = region.endpoint(ENDPOINT_TEMPLATE).unwrap();
        assert_eq!(uri.to_string(), "https://iaas.ap-tokyo-1.oraclecloud.com/");
    }
}
