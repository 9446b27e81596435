//! `stockroom-dashboard`
//!
//! **Responsibility:** Dashboard state controller for the inventory client.
//!
//! This crate provides:
//! - [`Dashboard`], the sole owner of the mirrored item collection and the draft
//! - Confirmed-only synchronization: local state changes after the server answers
//! - Plain-text rendering helpers used by the `stockroom` console front-end
//!
//! The controller does not depend on any rendering technology, so its
//! behavior is tested without a view.

pub mod controller;
pub mod error;
pub mod view;

pub use controller::Dashboard;
pub use error::DashboardError;
