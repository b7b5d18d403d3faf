//! Order Model
//!
//! Resolved lines are embedded in the order row rather than normalized
//! into a line-items table. Orders are created by the order service and
//! mutated only through status transitions; never deleted.

use std::fmt;
use std::str::FromStr;

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order lifecycle status
///
/// Happy path: new → preparing → ready → completed. `confirmed` exists as
/// an accepted state but triggers no customer message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Confirmed,
    Preparing,
    Ready,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Preparing => write!(f, "preparing"),
            Self::Ready => write!(f, "ready"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            _ => Err(()),
        }
    }
}

/// Resolved customization on an order line (server-derived price)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineCustomization {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Resolved order line
///
/// `line_total == (price + Σ customization prices) × quantity`, derived
/// from catalog state at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Menu item record id (string form)
    pub id: String,
    pub name: String,
    /// Unit price from the catalog
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub customizations: Vec<LineCustomization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Record link to restaurant
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    /// Human-facing display number (ORD-XXXX), advisory only
    pub order_number: String,
    pub customer_name: String,
    pub phone_number: String,
    /// Open set of channel tags ("walk-in", "web", "phone", ...)
    pub order_source: String,
    pub items: Vec<OrderLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Content payload for order creation (id assigned by the repository)
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    pub order_number: String,
    pub customer_name: String,
    pub phone_number: String,
    pub order_source: String,
    pub items: Vec<OrderLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for s in ["new", "confirmed", "preparing", "ready", "completed"] {
            let parsed: OrderStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }
}
