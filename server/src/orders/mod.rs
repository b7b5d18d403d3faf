//! Order domain
//!
//! [`OrderService`] owns creation and status transitions; [`status`]
//! holds the transition → customer message mapping.

pub mod service;
pub mod status;

pub use service::{CreateOrderRequest, CreatedOrder, OrderService, StatusTransition};
