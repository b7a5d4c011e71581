//! Crop recommendation inference service.
//!
//! Given soil nutrient and climate measurements, predicts a suitable crop
//! with a pretrained classifier and post-processes the prediction into
//! fertilizer advice, a human-readable justification, and an optionally
//! localized summary.

pub mod classifier;
pub mod config;
pub mod error;
pub mod fertilizer;
pub mod observation;
pub mod reason;
pub mod recommend;
pub mod routes;
pub mod state;
pub mod translate;

pub use error::{Error, Result};
