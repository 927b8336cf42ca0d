//! Service layer module.
//!
//! Contains the classification and transformation logic for input arrays.

pub mod classifier;

pub use classifier::{Classification, classify};
