//! Kitchen display WebSocket module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/kds", get(handler::ws_handler))
}
