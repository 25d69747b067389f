//! Client for the cloudnet virtual-networking API.
//!
//! The crate is organized the same way its wire traffic flows:
//!
//! - [`config`] resolves a region and signing material from a
//!   [`ConfigurationProvider`](config::ConfigurationProvider) into a [`Config`].
//! - [`client`] turns a [`Config`] into a layered tower stack (base-uri
//!   rewriting, request signing, delegation headers, tracing) wrapped in a
//!   cheaply clonable [`Client`] with a status-driven retry harness and a
//!   per-client circuit breaker.
//! - [`api`] exposes the [`VirtualNetwork`](api::VirtualNetwork) service
//!   client: one async method per REST operation, returning typed
//!   [`ApiResponse`](api::ApiResponse) values.
//!
//! ```no_run
//! use std::sync::Arc;
//! use cloudnet_client::{api::VirtualNetwork, config::ConfigurationProvider};
//! use cloudnet_core::models::CreateVcnDetails;
//!
//! # async fn doc(provider: Arc<dyn ConfigurationProvider>) -> Result<(), cloudnet_client::Error> {
//! let vnet = VirtualNetwork::new(provider)?;
//! let res = vnet
//!     .create_vcn(cloudnet_client::api::CreateVcnRequest {
//!         details: CreateVcnDetails {
//!             compartment_id: "ocid1.compartment.oc1..aaaa".into(),
//!             cidr_block: Some("10.0.0.0/16".into()),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created {} ({:?})", res.body.id, res.request_id);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod client;
pub mod config;
mod error;

pub use client::{Client, RetryPolicy};
pub use config::{Config, Region};
pub use error::{ConfigError, Error, Result, ServiceError};

#[cfg(test)] mod mock_tests;
