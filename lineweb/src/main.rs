//! lineweb crate entrypoint.
//!
//! Starts the Tokio runtime and launches the web server defined in the
//! `server` module. Keep this file minimal — most application logic lives
//! in `server`, `config`, `corpus` and `cursor`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// Line corpus loading
mod corpus;
/// Rotation cursor persistence
mod cursor;
/// Serve-path error types
mod error;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    server::run().await;
}
