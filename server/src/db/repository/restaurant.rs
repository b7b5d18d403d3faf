//! Restaurant Repository

use super::{BaseRepository, RepoResult, pure_key};
use crate::db::models::Restaurant;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find an active restaurant by its public slug
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Restaurant>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE slug = $slug AND is_active = true LIMIT 1")
            .bind(("slug", slug.to_string()))
            .await?;
        let restaurants: Vec<Restaurant> = result.take(0)?;
        Ok(restaurants.into_iter().next())
    }

    /// Find a restaurant by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> =
            self.base.db().select((TABLE, pure_key(TABLE, id))).await?;
        Ok(restaurant)
    }
}
