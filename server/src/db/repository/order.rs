//! Order Repository
//!
//! One insert per order; status mutations go through a conditional update
//! so concurrent transitions cannot both win.

use super::{BaseRepository, RepoError, RepoResult, link, pure_key};
use crate::db::models::{Order, OrderCreate, OrderStatus};
use chrono::{DateTime, Utc};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::any::Any;

const TABLE: &str = "order";
const RESTAURANT_TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new order under the given record key
    pub async fn create(&self, key: &str, data: OrderCreate) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create((TABLE, key)).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find an order by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select((TABLE, pure_key(TABLE, id))).await?;
        Ok(order)
    }

    /// Orders for a restaurant, newest first, optionally filtered by status
    pub async fn find_by_restaurant(
        &self,
        restaurant_id: &str,
        statuses: &[OrderStatus],
    ) -> RepoResult<Vec<Order>> {
        let rid = link(RESTAURANT_TABLE, restaurant_id);
        let mut result = if statuses.is_empty() {
            self.base
                .db()
                .query("SELECT * FROM order WHERE restaurant = $rid ORDER BY created_at DESC")
                .bind(("rid", rid))
                .await?
        } else {
            self.base
                .db()
                .query(
                    "SELECT * FROM order WHERE restaurant = $rid AND status IN $statuses \
                     ORDER BY created_at DESC",
                )
                .bind(("rid", rid))
                .bind(("statuses", statuses.to_vec()))
                .await?
        };
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders)
    }

    /// Orders for a restaurant created at or after the given instant
    pub async fn find_since(
        &self,
        restaurant_id: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<Order>> {
        // created_at is stored as an RFC 3339 UTC string, so a string
        // comparison against the same format is chronological.
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE restaurant = $rid AND created_at >= $since")
            .bind(("rid", link(RESTAURANT_TABLE, restaurant_id)))
            .bind(("since", since))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Conditionally set the status of an order
    ///
    /// The update only applies while the row still carries `expected`;
    /// returns `None` when a concurrent transition got there first.
    pub async fn update_status_checked(
        &self,
        id: &str,
        expected: OrderStatus,
        new_status: OrderStatus,
    ) -> RepoResult<Option<Order>> {
        let record_id = RecordId::from_table_key(TABLE, pure_key(TABLE, id));
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $order SET status = $new, updated_at = $now \
                 WHERE status = $expected RETURN AFTER",
            )
            .bind(("order", record_id))
            .bind(("new", new_status))
            .bind(("expected", expected))
            .bind(("now", Utc::now()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }
}
