//! Wire header names used by the virtual-networking service.

/// Server-assigned correlation id, returned on every response.
pub const REQUEST_ID: &str = "opc-request-id";

/// Caller-supplied (or client-generated) idempotency token for mutating
/// operations.
pub const RETRY_TOKEN: &str = "opc-retry-token";

/// Pagination cursor returned by list operations.
pub const NEXT_PAGE: &str = "opc-next-page";

/// Delegation token header, set when the client is constructed in
/// on-behalf-of mode.
pub const DELEGATION_TOKEN: &str = "opc-obo-token";

/// Entity tag returned with a resource, for optimistic concurrency.
pub const ETAG: &str = "etag";

/// Conditional-request header carrying a previously returned [`ETAG`].
pub const IF_MATCH: &str = "if-match";
