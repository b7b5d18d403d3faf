//! Customization Models
//!
//! A menu item owns customization categories ("Size", "Extras"); each
//! category owns selectable options that add to the line price.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Customization category entity (belongs to a menu item)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationCategory {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Record link to menu_item
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// Customization option entity (belongs to a customization category)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationOption {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Record link to customization_category
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub name: String,
    /// Price delta added to the line, zero or positive
    #[serde(default)]
    pub price: f64,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}
