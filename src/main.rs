//! BFHL Service Entry Point
//!
//! This is the main entry point for the BFHL array-processing service.
//! It initializes configuration, logging, and starts the HTTP server.

use bfhl_service::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
