//! # Courier Testing Utils
//!
//! Shared testing utilities for the courier dispatch system.
//! Provides in-memory mock repositories and test data builders that can be
//! used across all other crates in the workspace.
//!
//! Add this crate as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! courier-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod mocks;

pub use builders::{CarrierBuilder, ShipmentBuilder};
pub use mocks::{MockCarrierRepository, MockDistrictRepository, MockShipmentRepository};
