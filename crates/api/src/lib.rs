//! AkiyaVision API server library.
//!
//! Exposes the building blocks (config, state, store, error handling,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
