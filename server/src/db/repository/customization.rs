//! Customization Repository

use super::{BaseRepository, RepoResult, link, pure_key};
use crate::db::models::{CustomizationCategory, CustomizationOption};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::any::Any;

const OPTION_TABLE: &str = "customization_option";
const ITEM_TABLE: &str = "menu_item";
const CATEGORY_TABLE: &str = "customization_category";

#[derive(Clone)]
pub struct CustomizationRepository {
    base: BaseRepository,
}

impl CustomizationRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Customization categories owned by a menu item, in display order
    pub async fn find_categories_by_item(
        &self,
        item_id: &str,
    ) -> RepoResult<Vec<CustomizationCategory>> {
        let categories: Vec<CustomizationCategory> = self
            .base
            .db()
            .query(
                "SELECT * FROM customization_category WHERE menu_item = $item \
                 ORDER BY sort_order",
            )
            .bind(("item", link(ITEM_TABLE, item_id)))
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Options owned by a customization category, in display order
    pub async fn find_options_by_category(
        &self,
        category_id: &str,
    ) -> RepoResult<Vec<CustomizationOption>> {
        let options: Vec<CustomizationOption> = self
            .base
            .db()
            .query(
                "SELECT * FROM customization_option WHERE category = $cat \
                 ORDER BY sort_order",
            )
            .bind(("cat", link(CATEGORY_TABLE, category_id)))
            .await?
            .take(0)?;
        Ok(options)
    }

    /// Batched option lookup across all requested ids
    ///
    /// Only available options are returned; ids that resolve to nothing are
    /// simply absent from the result (the price resolver drops them).
    pub async fn find_available_options_by_ids(
        &self,
        ids: &[String],
    ) -> RepoResult<Vec<CustomizationOption>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let record_ids: Vec<RecordId> = ids
            .iter()
            .map(|id| RecordId::from_table_key(OPTION_TABLE, pure_key(OPTION_TABLE, id)))
            .collect();
        let options: Vec<CustomizationOption> = self
            .base
            .db()
            .query("SELECT * FROM customization_option WHERE id IN $ids AND is_available = true")
            .bind(("ids", record_ids))
            .await?
            .take(0)?;
        Ok(options)
    }
}
