//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{CustomizationCategory, CustomizationOption};
use crate::db::repository::{CustomizationRepository, MenuItemRepository};
use crate::utils::{AppError, AppResult};

/// One customization group: a category plus its options
#[derive(Serialize)]
pub struct CustomizationSection {
    #[serde(flatten)]
    pub category: CustomizationCategory,
    pub options: Vec<CustomizationOption>,
}

#[derive(Serialize)]
pub struct CustomizationsResponse {
    success: bool,
    customizations: Vec<CustomizationSection>,
}

/// GET /api/menu-items/{item_id}/customizations - grouped options for one item
pub async fn list_customizations(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
) -> AppResult<Json<CustomizationsResponse>> {
    let item = MenuItemRepository::new(state.get_db())
        .find_by_id(&item_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", item_id)))?;
    let item_id = item.id.as_ref().map(|id| id.to_string()).unwrap_or(item_id);

    let repo = CustomizationRepository::new(state.get_db());
    let categories = repo.find_categories_by_item(&item_id).await?;

    let mut customizations = Vec::with_capacity(categories.len());
    for category in categories {
        let category_id = category
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default();
        let options = repo.find_options_by_category(&category_id).await?;
        customizations.push(CustomizationSection { category, options });
    }

    Ok(Json(CustomizationsResponse {
        success: true,
        customizations,
    }))
}
