//! HTTP request handlers.

pub mod bfhl;
pub mod health;
