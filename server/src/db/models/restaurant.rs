//! Restaurant Model
//!
//! One row per tenant. Read-only for the ordering core.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Per-restaurant settings embedded in the restaurant row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSettings {
    /// Tax rate as a non-negative fraction (0.08 = 8%)
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            tax_rate: 0.0,
            currency: default_currency(),
        }
    }
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// URL-safe lookup key, unique per tenant
    pub slug: String,
    pub name: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default)]
    pub settings: RestaurantSettings,
}

fn default_true() -> bool {
    true
}
