//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`restaurants`] - restaurant lookup, menu and stats
//! - [`menu_items`] - per-item customizations
//! - [`orders`] - order creation, listing and status updates
//! - [`kds`] - kitchen display WebSocket

pub mod health;
pub mod kds;
pub mod menu_items;
pub mod orders;
pub mod restaurants;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
