//! Category Repository

use super::{BaseRepository, RepoResult, link};
use crate::db::models::Category;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const RESTAURANT_TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Active categories for a restaurant, in display order
    pub async fn find_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query(
                "SELECT * FROM category WHERE restaurant = $rid AND is_active = true \
                 ORDER BY sort_order",
            )
            .bind(("rid", link(RESTAURANT_TABLE, restaurant_id)))
            .await?
            .take(0)?;
        Ok(categories)
    }
}
