//! Transport layer: the tower stack, retry harness and circuit breaker.
//!
//! The [`Client`] wraps a boxed tower [`Service`] so the whole middleware
//! stack (base-uri rewriting, signing, delegation headers, tracing) hides
//! behind one cheaply clonable handle. The typed service client in
//! [`crate::api`] drives it through [`Client::send`], with retries and
//! breaker accounting applied by the invoke harness.
use bytes::Bytes;
use futures::future::BoxFuture;
use http::{Request, Response};
use http_body_util::BodyExt;
use tower::{buffer::Buffer, util::BoxService, BoxError, Layer, Service, ServiceExt};
use tower_http::map_response_body::MapResponseBodyLayer;

use crate::{Error, Result};

mod auth;
mod body;
mod breaker;
mod builder;
mod enablement;
pub mod middleware;
mod retry;

pub use auth::AuthError;
pub use body::Body;
pub use breaker::{configure_circuit_breaker, BreakerConfig, CircuitBreaker};
pub use builder::{ClientBuilder, DynBody};
pub use enablement::{is_service_enabled, set_service_enabled};
pub use retry::{InvalidBackoff, RetryPolicy};

use std::sync::Arc;

/// Client for a signed REST service endpoint.
///
/// Usually constructed for you by a typed service client such as
/// [`VirtualNetwork`](crate::api::VirtualNetwork); build one directly from a
/// [`Config`](crate::Config) via [`ClientBuilder`] when you need to splice in
/// custom middleware.
#[derive(Clone)]
pub struct Client {
    // - `Buffer` for cheap clone
    // - `BoxService` for dynamic response future type
    inner: Buffer<Request<Body>, BoxFuture<'static, Result<Response<Body>, BoxError>>>,
    breaker: Arc<CircuitBreaker>,
    service_name: &'static str,
}

impl Client {
    /// Create a [`Client`] using a custom `Service` stack.
    ///
    /// To create with the default stack from a [`Config`](crate::Config), use
    /// [`ClientBuilder::try_from`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn doc() -> Result<(), Box<dyn std::error::Error>> {
    /// use cloudnet_client::{client::ClientBuilder, Client, Config};
    ///
    /// let config = Config::new(http::Uri::from_static("https://iaas.example.com"));
    /// let client = ClientBuilder::try_from(config)?.build();
    /// # Ok(())
    /// # }
    /// ```
    pub fn new<S, B>(service: S, service_name: &'static str) -> Self
    where
        S: Service<Request<Body>, Response = Response<B>> + Send + 'static,
        S::Future: Send + 'static,
        S::Error: Into<BoxError>,
        B: http_body::Body<Data = bytes::Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        // Transform response body to `Body` and use type erased error to avoid type parameters.
        let service = MapResponseBodyLayer::new(Body::wrap_body)
            .layer(service)
            .map_err(|e| e.into());
        Self {
            inner: Buffer::new(BoxService::new(service), 1024),
            breaker: Arc::new(CircuitBreaker::new(BreakerConfig::resolve())),
            service_name,
        }
    }

    /// Replace the circuit breaker, e.g. with [`CircuitBreaker::disabled`].
    #[must_use]
    pub fn with_breaker(mut self, breaker: CircuitBreaker) -> Self {
        self.breaker = Arc::new(breaker);
        self
    }

    /// Perform a raw HTTP request against the service and return the raw
    /// response. No retries and no breaker accounting are applied here.
    pub async fn send(&self, request: Request<Body>) -> Result<Response<Body>> {
        let mut svc = self.inner.clone();
        let res = svc
            .ready()
            .await
            .map_err(Error::Service)?
            .call(request)
            .await
            .map_err(|err| {
                // Error decorating request
                err.downcast::<Error>()
                    .map(|e| *e)
                    // Signing failure surfaced through the filter layer
                    .or_else(|err| err.downcast::<AuthError>().map(|err| Error::Auth(*err)))
                    // Error requesting
                    .or_else(|err| err.downcast::<hyper::Error>().map(|err| Error::HyperError(*err)))
                    // Error from another middleware
                    .unwrap_or_else(Error::Service)
            })?;
        Ok(res)
    }

    /// Dispatch one operation's request with retries and breaker accounting,
    /// returning the final response buffered into memory.
    ///
    /// Only statuses the policy classifies as retryable trigger another
    /// attempt; transport errors fail immediately. The response is returned
    /// whatever its status, so callers can classify non-2xx answers with full
    /// header context.
    pub(crate) async fn invoke(
        &self,
        request: Request<Vec<u8>>,
        policy: &RetryPolicy,
    ) -> Result<(http::response::Parts, Bytes)> {
        let mut policy = policy.clone();
        let mut attempt: u32 = 0;
        loop {
            if !self.breaker.admit() {
                return Err(Error::CircuitOpen {
                    service: self.service_name,
                });
            }
            let req = clone_request(&request)?;
            match self.send(req.map(Body::from)).await {
                Ok(res) => {
                    let status = res.status();
                    self.breaker.observe(status);
                    if RetryPolicy::is_retryable_status(status) && attempt < policy.max_retries() {
                        attempt += 1;
                        tracing::debug!(%status, attempt, "retrying after retryable status");
                        policy.next_backoff().await;
                        continue;
                    }
                    let (parts, body) = res.into_parts();
                    let bytes = body.collect().await?.to_bytes();
                    return Ok((parts, bytes));
                }
                Err(err) => {
                    self.breaker.record_transport_failure();
                    return Err(err);
                }
            }
        }
    }
}

// `http::request::Parts` is not `Clone`, so each retry attempt rebuilds the
// request from its pieces.
fn clone_request(request: &Request<Vec<u8>>) -> Result<Request<Vec<u8>>> {
    let mut builder = Request::builder()
        .method(request.method().clone())
        .uri(request.uri().clone())
        .version(request.version());
    if let Some(headers) = builder.headers_mut() {
        headers.extend(request.headers().clone());
    }
    let mut cloned = builder.body(request.body().clone()).map_err(Error::HttpError)?;
    *cloned.extensions_mut() = request.extensions().clone();
    Ok(cloned)
}

#[cfg(test)]
mod tests {
    use futures::pin_mut;
    use http::{Request, Response, StatusCode};
    use tower_test::mock;

    use super::{Body, Client, RetryPolicy};

    #[tokio::test]
    async fn send_passes_requests_through_the_stack() {
        let (mock_service, handle) = mock::pair::<Request<Body>, Response<Body>>();
        let client = Client::new(mock_service, "core");

        let spawned = tokio::spawn(async move {
            pin_mut!(handle);
            let (request, send) = handle.next_request().await.expect("service not called");
            assert_eq!(request.uri().path(), "/20160918/vcns/ocid1.vcn.x");
            send.send_response(
                Response::builder()
                    .status(StatusCode::OK)
                    .body(Body::from(br#"{"id":"ocid1.vcn.x"}"#.to_vec()))
                    .unwrap(),
            );
        });

        let res = client
            .send(
                Request::builder()
                    .uri("/20160918/vcns/ocid1.vcn.x")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        spawned.await.unwrap();
    }

    #[tokio::test]
    async fn invoke_returns_non_success_responses_for_classification() {
        let (mock_service, handle) = mock::pair::<Request<Body>, Response<Body>>();
        let client = Client::new(mock_service, "core");

        let spawned = tokio::spawn(async move {
            pin_mut!(handle);
            let (_, send) = handle.next_request().await.expect("service not called");
            send.send_response(
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .header("opc-request-id", "req-404")
                    .body(Body::from(
                        br#"{"code":"NotAuthorizedOrNotFound","message":"nope"}"#.to_vec(),
                    ))
                    .unwrap(),
            );
        });

        let request = Request::builder()
            .uri("/20160918/subnets/ocid1.subnet.x")
            .body(Vec::new())
            .unwrap();
        let (parts, bytes) = client.invoke(request, &RetryPolicy::none()).await.unwrap();
        assert_eq!(parts.status, StatusCode::NOT_FOUND);
        assert_eq!(parts.headers.get("opc-request-id").unwrap(), "req-404");
        assert!(!bytes.is_empty());
        spawned.await.unwrap();
    }
}
