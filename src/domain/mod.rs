//! Domain models for the BFHL service.
//!
//! This module contains the API contract types for requests and responses.

pub mod dto;

pub use dto::{BfhlRequest, BfhlResponse, HealthResponse};
