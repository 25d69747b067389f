use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error payload the service returns on non-2xx responses.
///
/// Servers always return a JSON object with a machine `code` and a human
/// `message`; both are deserialized leniently so a malformed error body
/// still produces something inspectable.
#[derive(Deserialize, Serialize, Debug, Clone, Error, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[error("{code}: {message}")]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. `NotAuthorizedOrNotFound`.
    #[serde(default)]
    pub code: String,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod test {
    use super::ErrorResponse;

    #[test]
    fn error_body_deserializes() {
        let body = r#"{"code":"NotAuthorizedOrNotFound","message":"resource does not exist"}"#;
        let e: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(e.code, "NotAuthorizedOrNotFound");
        assert_eq!(e.to_string(), "NotAuthorizedOrNotFound: resource does not exist");
    }

    #[test]
    fn error_body_tolerates_missing_fields() {
        let e: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(e.code.is_empty());
    }
}
