//! Price Resolver
//!
//! Re-derives authoritative pricing for client-submitted line items from
//! the catalog. Client-side price or name fields are never read, so a
//! tampered request cannot influence totals.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::money::{round2, to_decimal, to_f64};
use crate::db::models::{LineCustomization, MenuItem, OrderLine};
use crate::db::repository::{CustomizationRepository, MenuItemRepository, link};
use crate::utils::{AppError, AppResult};

const ITEM_TABLE: &str = "menu_item";
const OPTION_TABLE: &str = "customization_option";

/// Reference to a selected customization option
#[derive(Debug, Clone, Deserialize)]
pub struct CustomizationRef {
    pub id: String,
}

/// Untrusted client order line
///
/// `quantity` accepts any JSON value and is coerced; extra fields the
/// client may attach (price, name) are dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRequest {
    pub id: String,
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
    #[serde(default)]
    pub customizations: Vec<CustomizationRef>,
    #[serde(default)]
    pub special_notes: Option<String>,
}

/// Output of a successful resolution, figures rounded once to 2dp
#[derive(Debug, Clone)]
pub struct PricedOrder {
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Coerce a client quantity value to a positive integer
///
/// Absent, unparsable, or non-positive values all become 1; a bad
/// quantity never rejects the order.
pub fn coerce_quantity(value: Option<&serde_json::Value>) -> i64 {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    };
    match parsed {
        Some(q) if q >= 1 => q,
        _ => 1,
    }
}

#[derive(Clone)]
pub struct PriceResolver {
    items: MenuItemRepository,
    options: CustomizationRepository,
}

impl PriceResolver {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            items: MenuItemRepository::new(db.clone()),
            options: CustomizationRepository::new(db),
        }
    }

    /// Resolve pricing for an order request
    ///
    /// All-or-nothing: any missing or unavailable item rejects the whole
    /// resolution. Unknown customization ids are silently dropped. Tax is
    /// computed once over the full subtotal to avoid per-line rounding
    /// drift.
    pub async fn resolve(
        &self,
        restaurant_id: &str,
        tax_rate: f64,
        lines: &[OrderLineRequest],
    ) -> AppResult<PricedOrder> {
        if lines.is_empty() {
            return Err(AppError::validation("Order must contain at least one item"));
        }

        let item_ids: Vec<String> = lines.iter().map(|l| l.id.clone()).collect();
        let items = self.items.find_by_ids(restaurant_id, &item_ids).await?;
        let items_by_id: HashMap<String, &MenuItem> = items
            .iter()
            .filter_map(|item| item.id.as_ref().map(|id| (id.to_string(), item)))
            .collect();

        // Missing ids mean a non-existent or cross-tenant item
        for line in lines {
            if !items_by_id.contains_key(&link(ITEM_TABLE, &line.id)) {
                return Err(AppError::not_found(format!(
                    "Menu item {} not found",
                    line.id
                )));
            }
        }

        // Availability check is all-or-nothing for the whole order
        let unavailable: Vec<String> = lines
            .iter()
            .filter_map(|line| items_by_id.get(&link(ITEM_TABLE, &line.id)))
            .filter(|item| !item.is_available)
            .map(|item| item.name.clone())
            .collect();
        if !unavailable.is_empty() {
            return Err(AppError::UnavailableItem(unavailable));
        }

        // One batched option lookup across all lines
        let option_ids: Vec<String> = lines
            .iter()
            .flat_map(|l| l.customizations.iter().map(|c| c.id.clone()))
            .collect();
        let options = self.options.find_available_options_by_ids(&option_ids).await?;
        let options_by_id: HashMap<String, _> = options
            .iter()
            .filter_map(|opt| opt.id.as_ref().map(|id| (id.to_string(), opt)))
            .collect();

        let mut resolved = Vec::with_capacity(lines.len());
        let mut subtotal = Decimal::ZERO;

        for line in lines {
            let item = items_by_id[&link(ITEM_TABLE, &line.id)];
            let quantity = coerce_quantity(line.quantity.as_ref());

            let mut customizations = Vec::new();
            let mut options_price = Decimal::ZERO;
            for selected in &line.customizations {
                // Unresolved ids contribute nothing
                if let Some(opt) = options_by_id.get(&link(OPTION_TABLE, &selected.id)) {
                    options_price += to_decimal(opt.price);
                    customizations.push(LineCustomization {
                        id: opt.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                        name: opt.name.clone(),
                        price: opt.price,
                    });
                }
            }

            let unit_price = to_decimal(item.price);
            let line_total = (unit_price + options_price) * Decimal::from(quantity);
            subtotal += line_total;

            resolved.push(OrderLine {
                id: item.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                name: item.name.clone(),
                price: item.price,
                quantity,
                customizations,
                special_notes: line.special_notes.clone(),
                line_total: to_f64(line_total),
            });
        }

        // Tax once over the full subtotal, each figure rounded exactly once
        let subtotal = round2(subtotal);
        let tax = round2(subtotal * to_decimal(tax_rate));
        let total = subtotal + tax;

        Ok(PricedOrder {
            lines: resolved,
            subtotal: to_f64(subtotal),
            tax: to_f64(tax),
            total: to_f64(total),
        })
    }
}
