//! Order API Handlers
//!
//! Creation and status updates hand the persisted order to the
//! notification layer in a detached task: kitchen displays and customer
//! messages never delay or fail the HTTP response.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::Order;
use crate::notify;
use crate::orders::{CreateOrderRequest, OrderService};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct OrderResponse {
    success: bool,
    order: Order,
}

/// Created order plus the tax rate it was priced with, for client display
#[derive(Serialize)]
pub struct CreatedOrderBody {
    #[serde(flatten)]
    order: Order,
    tax_rate: f64,
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    success: bool,
    order: CreatedOrderBody,
}

#[derive(Serialize)]
pub struct OrderListResponse {
    success: bool,
    orders: Vec<Order>,
    count: usize,
}

#[derive(Deserialize)]
pub struct OrderListQuery {
    /// Comma-separated status filter (unknown names are ignored)
    status: Option<String>,
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    status: Option<String>,
}

/// POST /api/restaurants/{restaurant_id}/orders - create an order
pub async fn create(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<CreateOrderResponse>> {
    let service = OrderService::new(state.get_db());
    let created = service.create(&restaurant_id, payload).await?;

    // Fan out to kitchen displays and customer messaging off the request path
    tokio::spawn(notify::order_created(state.clone(), created.order.clone()));

    Ok(Json(CreateOrderResponse {
        success: true,
        order: CreatedOrderBody {
            order: created.order,
            tax_rate: created.tax_rate,
        },
    }))
}

/// GET /api/restaurants/{restaurant_id}/orders - list orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<OrderListResponse>> {
    let service = OrderService::new(state.get_db());
    let orders = service.list(&restaurant_id, query.status.as_deref()).await?;
    let count = orders.len();
    Ok(Json(OrderListResponse {
        success: true,
        orders,
        count,
    }))
}

/// GET /api/restaurants/{restaurant_id}/orders/{order_id} - single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((restaurant_id, order_id)): Path<(String, String)>,
) -> AppResult<Json<OrderResponse>> {
    let service = OrderService::new(state.get_db());
    let order = service.get(&restaurant_id, &order_id).await?;
    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// PUT /api/orders/{order_id}/status - apply a status transition
pub async fn update_status(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<OrderResponse>> {
    let new_status = payload
        .status
        .ok_or_else(|| AppError::validation("Missing field: status"))?;

    let service = OrderService::new(state.get_db());
    let transition = service.transition(&order_id, &new_status).await?;

    tokio::spawn(notify::status_changed(
        state.clone(),
        transition.order.clone(),
        transition.previous,
    ));

    Ok(Json(OrderResponse {
        success: true,
        order: transition.order,
    }))
}
