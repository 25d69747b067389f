//! Transport-free types for the cloudnet virtual-networking API.
//!
//! This crate contains the request builder, wire constants, the service error
//! body, and the typed data model shared by the client crate. It performs no
//! I/O; everything here produces or consumes plain [`http`] types.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

pub mod headers;

pub mod models;

pub mod request;
pub use request::Request;

mod response;
pub use response::ErrorResponse;
