//! Menu Item Repository

use super::{BaseRepository, RepoResult, link, pure_key};
use crate::db::models::MenuItem;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::any::Any;

const TABLE: &str = "menu_item";
const RESTAURANT_TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All items for a restaurant, optionally only the available ones
    pub async fn find_by_restaurant(
        &self,
        restaurant_id: &str,
        available_only: bool,
    ) -> RepoResult<Vec<MenuItem>> {
        let sql = if available_only {
            "SELECT * FROM menu_item WHERE restaurant = $rid AND is_available = true \
             ORDER BY sort_order"
        } else {
            "SELECT * FROM menu_item WHERE restaurant = $rid ORDER BY sort_order"
        };
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(sql)
            .bind(("rid", link(RESTAURANT_TABLE, restaurant_id)))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Items for a restaurant matching the requested ids only
    ///
    /// The restaurant filter makes cross-tenant ids resolve to nothing.
    pub async fn find_by_ids(
        &self,
        restaurant_id: &str,
        ids: &[String],
    ) -> RepoResult<Vec<MenuItem>> {
        let record_ids: Vec<RecordId> = ids
            .iter()
            .map(|id| RecordId::from_table_key(TABLE, pure_key(TABLE, id)))
            .collect();
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE restaurant = $rid AND id IN $ids")
            .bind(("rid", link(RESTAURANT_TABLE, restaurant_id)))
            .bind(("ids", record_ids))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find a single item by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select((TABLE, pure_key(TABLE, id))).await?;
        Ok(item)
    }
}
