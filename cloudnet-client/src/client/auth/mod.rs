//! Request signing.
//!
//! Every outbound request is signed with the draft-cavage HTTP signature
//! scheme: a canonical signing string is assembled from selected headers,
//! signed through the [`ConfigurationProvider`], and the result placed in the
//! `authorization` header. Requests with a payload additionally get a
//! `x-content-sha256` digest so the body is covered by the signature.
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use http::{
    header::{InvalidHeaderValue, AUTHORIZATION, CONTENT_LENGTH, DATE, HOST},
    HeaderValue, Method, Request,
};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tower::{filter::Predicate, BoxError};

use super::Body;
use crate::config::ConfigurationProvider;

const CONTENT_SHA256: &str = "x-content-sha256";
const SIGNATURE_VERSION: &str = "1";
const SIGNING_ALGORITHM: &str = "rsa-sha256";

#[derive(Error, Debug)]
/// Client auth errors
pub enum AuthError {
    /// The provider could not produce a signature.
    #[error("signature operation failed: {0}")]
    Sign(String),

    /// The provider could not supply a signing key id.
    #[error("signing key unavailable: {0}")]
    KeyUnavailable(#[source] crate::error::ConfigError),

    /// A computed header value was not valid header text.
    #[error("invalid signing header value: {0}")]
    InvalidSigningHeader(#[source] InvalidHeaderValue),

    /// The request URI had no authority to derive a `host` header from.
    #[error("request uri has no host: {0}")]
    MissingHost(String),
}

/// Signs requests on their way through the stack.
///
/// Used with [`tower::filter::FilterLayer`]; signing is pure computation plus
/// one provider callback, so the synchronous predicate form suffices.
#[derive(Clone)]
pub struct RequestSigner {
    provider: Arc<dyn ConfigurationProvider>,
}

impl RequestSigner {
    /// A signer delegating the key operation to `provider`.
    pub fn new(provider: Arc<dyn ConfigurationProvider>) -> Self {
        Self { provider }
    }
}

impl Predicate<Request<Body>> for RequestSigner {
    type Request = Request<Body>;

    fn check(&mut self, mut request: Request<Body>) -> Result<Self::Request, BoxError> {
        sign_request(&mut request, &*self.provider, Utc::now())?;
        Ok(request)
    }
}

// Methods whose payload is covered by the signature.
fn has_signed_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Sign `request` in place: fill in `date`, `host` and (for payload-bearing
/// methods) `content-length` and `x-content-sha256`, then compute the
/// `authorization` header over them.
fn sign_request(
    request: &mut Request<Body>,
    provider: &dyn ConfigurationProvider,
    now: DateTime<Utc>,
) -> Result<(), AuthError> {
    let host = request
        .uri()
        .authority()
        .map(|a| a.as_str().to_owned())
        .ok_or_else(|| AuthError::MissingHost(request.uri().to_string()))?;
    let date = now.format("%a, %d %b %Y %H:%M:%S GMT").to_string();

    request
        .headers_mut()
        .insert(DATE, header_value(&date)?);
    request
        .headers_mut()
        .insert(HOST, header_value(&host)?);

    let mut signed_headers = vec!["date", "(request-target)", "host"];
    if has_signed_body(request.method()) {
        // The body is always buffered at this point; only response bodies
        // are streamed.
        let (digest, length) = {
            let payload = request.body().as_bytes().unwrap_or_default();
            (BASE64.encode(Sha256::digest(payload)), payload.len().to_string())
        };
        request
            .headers_mut()
            .insert(CONTENT_LENGTH, header_value(&length)?);
        request
            .headers_mut()
            .insert(CONTENT_SHA256, header_value(&digest)?);
        signed_headers.extend(["content-length", "content-type", CONTENT_SHA256]);
    }

    let signing_string = signing_string(request, &signed_headers)?;
    let signature = provider.sign(signing_string.as_bytes())?;
    let key_id = provider.key_id().map_err(AuthError::KeyUnavailable)?;

    let authorization = format!(
        "Signature version=\"{SIGNATURE_VERSION}\",keyId=\"{key_id}\",\
         algorithm=\"{SIGNING_ALGORITHM}\",headers=\"{}\",signature=\"{}\"",
        signed_headers.join(" "),
        BASE64.encode(signature),
    );
    request
        .headers_mut()
        .insert(AUTHORIZATION, header_value(&authorization)?);
    Ok(())
}

/// The canonical signing string: one `name: value` line per signed header,
/// with `(request-target)` expanding to the lowercased method and the
/// path-and-query.
fn signing_string(request: &Request<Body>, signed_headers: &[&str]) -> Result<String, AuthError> {
    let mut lines = Vec::with_capacity(signed_headers.len());
    for name in signed_headers {
        let line = if *name == "(request-target)" {
            let target = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            format!(
                "(request-target): {} {target}",
                request.method().as_str().to_ascii_lowercase()
            )
        } else {
            let value = request
                .headers()
                .get(*name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            format!("{name}: {value}")
        };
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn header_value(value: &str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(value).map_err(AuthError::InvalidSigningHeader)
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use http::header::CONTENT_TYPE;

    use super::*;
    use crate::{config::Region, error::ConfigError};

    struct StaticProvider;

    impl ConfigurationProvider for StaticProvider {
        fn region(&self) -> Result<Region, ConfigError> {
            Region::new("us-phoenix-1")
        }

        fn key_id(&self) -> Result<String, ConfigError> {
            Ok("ocid1.tenancy/ocid1.user/aa:bb".into())
        }

        fn sign(&self, message: &[u8]) -> Result<Vec<u8>, AuthError> {
            // Deterministic stand-in for the RSA operation.
            Ok(Sha256::digest(message).to_vec())
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn get_requests_sign_the_core_headers() {
        let mut request = Request::builder()
            .method(Method::GET)
            .uri("https://iaas.us-phoenix-1.oraclecloud.com/20160918/vcns?compartmentId=c1")
            .body(Body::empty())
            .unwrap();
        sign_request(&mut request, &StaticProvider, test_time()).unwrap();

        assert_eq!(
            request.headers().get(DATE).unwrap(),
            "Thu, 01 Jun 2023 12:00:00 GMT"
        );
        assert_eq!(
            request.headers().get(HOST).unwrap(),
            "iaas.us-phoenix-1.oraclecloud.com"
        );
        let auth = request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap();
        assert!(auth.starts_with("Signature version=\"1\""));
        assert!(auth.contains("keyId=\"ocid1.tenancy/ocid1.user/aa:bb\""));
        assert!(auth.contains("algorithm=\"rsa-sha256\""));
        assert!(auth.contains("headers=\"date (request-target) host\""));
        assert!(!request.headers().contains_key(CONTENT_SHA256));
    }

    #[test]
    fn post_requests_sign_the_body_digest() {
        let body = br#"{"cidrBlock":"10.0.0.0/16"}"#.to_vec();
        let expected_digest = BASE64.encode(Sha256::digest(&body));
        let mut request = Request::builder()
            .method(Method::POST)
            .uri("https://iaas.us-phoenix-1.oraclecloud.com/20160918/vcns")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        sign_request(&mut request, &StaticProvider, test_time()).unwrap();

        assert_eq!(
            request.headers().get(CONTENT_SHA256).unwrap().to_str().unwrap(),
            expected_digest
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "27");
        let auth = request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap();
        assert!(auth.contains(
            "headers=\"date (request-target) host content-length content-type x-content-sha256\""
        ));
    }

    #[test]
    fn signing_string_layout() {
        let mut request = Request::builder()
            .method(Method::GET)
            .uri("https://iaas.us-phoenix-1.oraclecloud.com/20160918/vcns/ocid1.vcn.x")
            .body(Body::empty())
            .unwrap();
        sign_request(&mut request, &StaticProvider, test_time()).unwrap();

        let signing = signing_string(&request, &["date", "(request-target)", "host"]).unwrap();
        assert_eq!(
            signing,
            "date: Thu, 01 Jun 2023 12:00:00 GMT\n\
             (request-target): get /20160918/vcns/ocid1.vcn.x\n\
             host: iaas.us-phoenix-1.oraclecloud.com"
        );
    }
}
