//! Core server plumbing
//!
//! - [`config`] - environment-driven configuration
//! - [`state`] - shared service handles
//! - [`server`] - HTTP server startup and routing

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app, build_router};
pub use state::ServerState;
