//! Restaurant API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/restaurants", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Public lookup by slug; the param name matches the sibling routes
        // because every route under this prefix shares the position
        .route("/{restaurant_id}", get(handler::get_by_slug))
        .route("/{restaurant_id}/menu", get(handler::get_menu))
        .route("/{restaurant_id}/stats", get(handler::get_stats))
}
