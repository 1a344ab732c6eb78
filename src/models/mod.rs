//! Domain models for the stream status endpoint.
//!
//! These types are shared across all modules: twitch, checker, and api.

pub mod request;
pub mod twitch;
pub mod status;
