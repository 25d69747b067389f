//! Error handling in [`cloudnet-client`][crate]
use http::{HeaderMap, StatusCode};
use thiserror::Error;

pub use cloudnet_core::ErrorResponse;

/// Convenient alias for the crate's error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible errors when talking to the virtual-networking service.
#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a non-2xx status.
    #[error("ApiError: {0}")]
    Api(#[source] ServiceError),

    /// Hyper error from the underlying transport.
    #[error("HyperError: {0}")]
    HyperError(#[source] hyper::Error),

    /// Error from the tower service stack.
    #[error("ServiceError: {0}")]
    Service(#[source] tower::BoxError),

    /// Errors related to request signing.
    #[error("auth error: {0}")]
    Auth(#[source] crate::client::AuthError),

    /// Failed to build a request.
    #[error("failed to build request: {0}")]
    BuildRequest(#[source] cloudnet_core::Error),

    /// Failed to serialize a request body.
    #[error("failed to serialize request body: {0}")]
    SerializeRequest(#[source] serde_json::Error),

    /// Http based error.
    #[error("HttpError: {0}")]
    HttpError(#[source] http::Error),

    /// The response body did not match the operation's response type.
    #[error("failed to decode {operation} response{}: {source}", fmt_request_id(.request_id))]
    Decode {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// Correlation id from the response headers, when present.
        request_id: Option<String>,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The per-service circuit breaker is open; the call was not attempted.
    #[error("circuit breaker open for service {service}")]
    CircuitOpen {
        /// Service the breaker guards.
        service: &'static str,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[source] ConfigError),
}

fn fmt_request_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" (opc-request-id: {id})"),
        None => String::new(),
    }
}

/// A non-2xx answer from the service, enriched with call context.
///
/// Everything a caller needs for diagnostics is carried here: the status and
/// response headers of the raw exchange, the server's error code and message,
/// the operation and service names, the correlation id, and a link to the
/// operation's API documentation.
#[derive(Error, Debug)]
#[error(
    "{service}.{operation} failed with status {status}: {code}: {message} \
     (see {doc_link}){}", fmt_request_id(.request_id)
)]
pub struct ServiceError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Server-supplied machine-readable error code.
    pub code: String,
    /// Server-supplied message.
    pub message: String,
    /// Name of the failed operation, e.g. `GetRouteTable`.
    pub operation: &'static str,
    /// Name of the service, e.g. `core`.
    pub service: &'static str,
    /// API reference documentation for the operation.
    pub doc_link: &'static str,
    /// Correlation id from the response headers, when present.
    pub request_id: Option<String>,
    /// Full response headers, for caller inspection.
    pub headers: HeaderMap,
}

/// Possible errors when resolving client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The service has been disabled via the process-wide enablement map.
    #[error(
        "service {service} is disabled; enable it with \
         cloudnet_client::client::set_service_enabled(\"{service}\", true) \
         or remove it from CLOUDNET_DISABLED_SERVICES"
    )]
    ServiceDisabled {
        /// Name of the disabled service.
        service: &'static str,
    },

    /// The region identifier was empty or malformed.
    #[error("invalid region identifier: {0:?}")]
    InvalidRegion(String),

    /// The configuration provider could not supply a region.
    #[error("configuration provider did not yield a region: {0}")]
    MissingRegion(String),

    /// The endpoint template did not produce a valid URI.
    #[error("endpoint {endpoint:?} is not a valid uri: {source}")]
    InvalidEndpoint {
        /// The endpoint string that failed to parse.
        endpoint: String,
        /// The underlying URI parse failure.
        #[source]
        source: http::uri::InvalidUri,
    },

    /// The configuration provider could not supply a signing key id.
    #[error("configuration provider did not yield a key id: {0}")]
    MissingKeyId(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn service_error_display_names_the_operation() {
        let err = ServiceError {
            status: StatusCode::NOT_FOUND,
            code: "NotAuthorizedOrNotFound".into(),
            message: "resource does not exist".into(),
            operation: "GetRouteTable",
            service: "core",
            doc_link: "https://docs.example.com/api/GetRouteTable",
            request_id: Some("req-1".into()),
            headers: HeaderMap::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("core.GetRouteTable"));
        assert!(msg.contains("404"));
        assert!(msg.contains("opc-request-id: req-1"));
    }
}
