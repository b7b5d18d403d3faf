//! Order Service
//!
//! Orchestrates order creation (validate → resolve pricing → persist) and
//! status transitions. Pricing failures happen before any write, so a
//! rejected order never leaves a row behind.

use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use uuid::Uuid;

use crate::db::models::{Order, OrderCreate, OrderStatus};
use crate::db::repository::{OrderRepository, RestaurantRepository, link};
use crate::pricing::{OrderLineRequest, PriceResolver};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

const RESTAURANT_TABLE: &str = "restaurant";

/// Display number prefix; suffix is a random 4-digit number, advisory only
const ORDER_NUMBER_PREFIX: &str = "ORD";

const DEFAULT_ORDER_SOURCE: &str = "walk-in";

/// Untrusted order creation request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLineRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A persisted order plus the tax rate it was priced with
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub order: Order,
    pub tax_rate: f64,
}

/// Result of a status transition, carrying the before/after pair the
/// notification layer needs
#[derive(Debug, Clone)]
pub struct StatusTransition {
    pub previous: OrderStatus,
    pub order: Order,
}

#[derive(Clone)]
pub struct OrderService {
    restaurants: RestaurantRepository,
    orders: OrderRepository,
    resolver: PriceResolver,
}

impl OrderService {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            restaurants: RestaurantRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            resolver: PriceResolver::new(db),
        }
    }

    /// Create an order from an untrusted request
    pub async fn create(
        &self,
        restaurant_id: &str,
        request: CreateOrderRequest,
    ) -> AppResult<CreatedOrder> {
        let customer_name = validate_required_text(
            request.customer_name.as_deref(),
            "customer_name",
            MAX_NAME_LEN,
        )?;
        let phone_number = validate_required_text(
            request.phone_number.as_deref(),
            "phone_number",
            MAX_SHORT_TEXT_LEN,
        )?;
        let notes = validate_optional_text(request.notes.as_deref(), "notes", MAX_NOTE_LEN)?;

        let restaurant = self
            .restaurants
            .find_by_id(restaurant_id)
            .await?
            .filter(|r| r.is_active)
            .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))?;
        let tax_rate = restaurant.settings.tax_rate;

        // Authoritative pricing happens before any write
        let priced = self
            .resolver
            .resolve(restaurant_id, tax_rate, &request.items)
            .await?;

        // Letter-prefixed so the record id is a plain ident (no escaping
        // in the string form, URL-safe as a path segment)
        let key = format!("o{}", Uuid::new_v4().simple());
        let order_number = generate_order_number();
        let now = Utc::now();

        let order = self
            .orders
            .create(
                &key,
                OrderCreate {
                    restaurant: link(RESTAURANT_TABLE, restaurant_id)
                        .parse()
                        .map_err(|_| AppError::validation("Invalid restaurant id"))?,
                    order_number: order_number.clone(),
                    customer_name,
                    phone_number,
                    order_source: request
                        .order_type
                        .filter(|t| !t.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_ORDER_SOURCE.to_string()),
                    items: priced.lines,
                    subtotal: priced.subtotal,
                    tax: priced.tax,
                    total: priced.total,
                    notes,
                    status: OrderStatus::New,
                    created_at: now,
                    updated_at: now,
                },
            )
            .await?;

        tracing::info!(
            order_number = %order_number,
            restaurant = %restaurant.name,
            total = order.total,
            "Order created"
        );

        Ok(CreatedOrder { order, tax_rate })
    }

    /// Apply a status transition
    ///
    /// The write is conditional on the status read just before, so two
    /// concurrent transitions cannot both observe the same before/after
    /// pair; the loser gets a conflict instead of a duplicate
    /// notification.
    pub async fn transition(&self, order_id: &str, new_status: &str) -> AppResult<StatusTransition> {
        let new_status: OrderStatus = new_status
            .parse()
            .map_err(|_| AppError::validation(format!("Unknown order status: {new_status}")))?;

        let current = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;
        let previous = current.status;

        let updated = self
            .orders
            .update_status_checked(order_id, previous, new_status)
            .await?
            .ok_or_else(|| {
                AppError::conflict("Order status changed concurrently, please retry")
            })?;

        tracing::info!(
            order_number = %updated.order_number,
            from = %previous,
            to = %new_status,
            "Order status updated"
        );

        Ok(StatusTransition {
            previous,
            order: updated,
        })
    }

    /// Orders for a restaurant, optionally filtered by a comma-separated
    /// status list (unknown names are ignored)
    pub async fn list(
        &self,
        restaurant_id: &str,
        status_filter: Option<&str>,
    ) -> AppResult<Vec<Order>> {
        let statuses: Vec<OrderStatus> = status_filter
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        Ok(self.orders.find_by_restaurant(restaurant_id, &statuses).await?)
    }

    /// A single order, scoped to its restaurant (cross-tenant ids are 404)
    pub async fn get(&self, restaurant_id: &str, order_id: &str) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .filter(|o| o.restaurant.to_string() == link(RESTAURANT_TABLE, restaurant_id))
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;
        Ok(order)
    }
}

/// `ORD-` plus a random 4-digit suffix; collisions are accepted, the
/// record id is the real identity
fn generate_order_number() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
    format!("{}-{}", ORDER_NUMBER_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_numbers_have_fixed_shape() {
        for _ in 0..50 {
            let n = generate_order_number();
            let suffix = n.strip_prefix("ORD-").unwrap();
            assert_eq!(suffix.len(), 4);
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
