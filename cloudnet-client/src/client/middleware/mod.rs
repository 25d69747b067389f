//! Middleware types returned from [`ClientBuilder`](crate::client::ClientBuilder).
mod base_uri;
mod extra_headers;

pub use base_uri::BaseUriLayer;
pub use extra_headers::ExtraHeadersLayer;
