/// Twitch Stream Status: Shared Library
///
/// This crate contains the Twitch client, the stream status checker,
/// and the HTTP translation used by the serverless handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod api;
pub mod checker;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod twitch;

pub fn name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
