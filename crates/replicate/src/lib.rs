//! Client for the Replicate predictions API and the production
//! [`ImageGenerator`](akiya_core::generation::ImageGenerator) built on it.

pub mod api;
pub mod config;
pub mod generator;
pub mod output;

pub use api::{ReplicateApi, ReplicateError};
pub use config::ReplicateConfig;
pub use generator::ReplicateGenerator;
