//! Restaurant API Handlers

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Category, MenuItem, Restaurant};
use crate::db::repository::{
    CategoryRepository, MenuItemRepository, OrderRepository, RestaurantRepository,
};
use crate::pricing::money::{to_decimal, to_f64};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct RestaurantResponse {
    success: bool,
    restaurant: Restaurant,
}

/// One menu section: a category plus its items
#[derive(Serialize)]
pub struct MenuSection {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<MenuItem>,
}

#[derive(Serialize)]
pub struct MenuStats {
    pub total_categories: usize,
    pub total_items: usize,
    pub available_items: usize,
}

#[derive(Serialize)]
pub struct MenuResponse {
    success: bool,
    menu: Vec<MenuSection>,
    stats: MenuStats,
}

#[derive(Deserialize)]
pub struct MenuQuery {
    /// When true, sections only carry currently available items
    #[serde(default)]
    available_only: bool,
}

#[derive(Serialize)]
pub struct StatsResponse {
    success: bool,
    menu: MenuStats,
    orders_today: usize,
    revenue_today: f64,
    /// Orders per status, today only
    status_counts: BTreeMap<String, usize>,
}

/// GET /api/restaurants/{slug} - public lookup by slug
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<RestaurantResponse>> {
    let repo = RestaurantRepository::new(state.get_db());
    let restaurant = repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", slug)))?;
    Ok(Json(RestaurantResponse {
        success: true,
        restaurant,
    }))
}

/// GET /api/restaurants/{restaurant_id}/menu - menu grouped by category
pub async fn get_menu(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<MenuResponse>> {
    let restaurant = require_restaurant(&state, &restaurant_id).await?;
    let restaurant_id = restaurant
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or(restaurant_id);

    let categories = CategoryRepository::new(state.get_db())
        .find_by_restaurant(&restaurant_id)
        .await?;
    let items = MenuItemRepository::new(state.get_db())
        .find_by_restaurant(&restaurant_id, query.available_only)
        .await?;

    let total_categories = categories.len();
    let total_items = items.len();
    let available_items = items.iter().filter(|i| i.is_available).count();

    // Group items under their category, keeping category sort order
    let mut menu: Vec<MenuSection> = categories
        .into_iter()
        .map(|category| MenuSection {
            category,
            items: Vec::new(),
        })
        .collect();
    for item in items {
        let category_link = item.category.to_string();
        if let Some(section) = menu.iter_mut().find(|s| {
            s.category
                .id
                .as_ref()
                .is_some_and(|id| id.to_string() == category_link)
        }) {
            section.items.push(item);
        }
        // Items pointing at an inactive or missing category are dropped
    }

    Ok(Json(MenuResponse {
        success: true,
        menu,
        stats: MenuStats {
            total_categories,
            total_items,
            available_items,
        },
    }))
}

/// GET /api/restaurants/{restaurant_id}/stats - menu counts and today's orders
pub async fn get_stats(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<StatsResponse>> {
    let restaurant = require_restaurant(&state, &restaurant_id).await?;
    let restaurant_id = restaurant
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or(restaurant_id);

    let categories = CategoryRepository::new(state.get_db())
        .find_by_restaurant(&restaurant_id)
        .await?;
    let items = MenuItemRepository::new(state.get_db())
        .find_by_restaurant(&restaurant_id, false)
        .await?;

    let day_start = Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();
    let orders = OrderRepository::new(state.get_db())
        .find_since(&restaurant_id, day_start)
        .await?;

    let revenue: Decimal = orders.iter().map(|o| to_decimal(o.total)).sum();
    let mut status_counts: BTreeMap<String, usize> = BTreeMap::new();
    for order in &orders {
        *status_counts.entry(order.status.to_string()).or_default() += 1;
    }

    Ok(Json(StatsResponse {
        success: true,
        menu: MenuStats {
            total_categories: categories.len(),
            total_items: items.len(),
            available_items: items.iter().filter(|i| i.is_available).count(),
        },
        orders_today: orders.len(),
        revenue_today: to_f64(revenue),
        status_counts,
    }))
}

/// Resolve and require an active restaurant by record id
async fn require_restaurant(state: &ServerState, restaurant_id: &str) -> AppResult<Restaurant> {
    RestaurantRepository::new(state.get_db())
        .find_by_id(restaurant_id)
        .await?
        .filter(|r| r.is_active)
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))
}
