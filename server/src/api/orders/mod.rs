//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest(
            "/api/restaurants/{restaurant_id}/orders",
            restaurant_routes(),
        )
        .nest("/api/orders", order_routes())
}

fn restaurant_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/{order_id}", get(handler::get_by_id))
}

fn order_routes() -> Router<ServerState> {
    Router::new().route("/{order_id}/status", put(handler::update_status))
}
