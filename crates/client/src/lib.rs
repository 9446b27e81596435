//! `stockroom-client`
//!
//! **Responsibility:** Remote item client for the inventory REST backend.
//!
//! This crate provides:
//! - The [`ItemApi`] seam the dashboard controller talks to
//! - [`HttpItemClient`], the `reqwest` implementation of it
//! - Base URL configuration
//!
//! Each call is a single best-effort round trip: no retry, no caching and no
//! timeout beyond the transport default.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ItemApi;
pub use config::{ClientConfig, API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
pub use error::RequestError;
pub use http::HttpItemClient;
