//! Domain logic for the AkiyaVision renovation service.
//!
//! Nothing in this crate knows about HTTP: the API crate wires these pieces
//! into request handlers and the Replicate crate implements
//! [`generation::ImageGenerator`] against the hosted model.

pub mod catalog;
pub mod error;
pub mod generation;
pub mod image_ref;
pub mod normalize;
pub mod resolver;
pub mod styles;
pub mod types;
