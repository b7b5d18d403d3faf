//! Kitchen display broadcast hub
//!
//! A thin wrapper over `tokio::sync::broadcast`: order events fan out to
//! every connected kitchen display. Publishing with zero observers is
//! silent; slow observers drop events rather than blocking the pipeline.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::db::models::{Order, OrderStatus};

/// Capacity of the broadcast channel
const DEFAULT_CAPACITY: usize = 256;

/// Display-ready projection of a freshly created order
#[derive(Debug, Clone, Serialize)]
pub struct KdsOrderView {
    pub order_id: String,
    pub order_number: String,
    pub customer_name: String,
    pub phone_number: String,
    /// One display string per line, customizations inlined
    pub items: Vec<String>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub status: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl KdsOrderView {
    pub fn from_order(order: &Order) -> Self {
        let items = order
            .items
            .iter()
            .map(|line| {
                if line.customizations.is_empty() {
                    format!("{}x {}", line.quantity, line.name)
                } else {
                    let opts: Vec<&str> = line
                        .customizations
                        .iter()
                        .map(|c| c.name.as_str())
                        .collect();
                    format!("{}x {} ({})", line.quantity, line.name, opts.join(", "))
                }
            })
            .collect();

        Self {
            order_id: order.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.clone(),
            items,
            subtotal: format!("{:.2}", order.subtotal),
            tax: format!("{:.2}", order.tax),
            total: format!("{:.2}", order.total),
            status: order.status.to_string(),
            timestamp: order.created_at.to_rfc3339(),
            notes: order.notes.clone(),
        }
    }
}

/// Raw status change, broadcast for every transition whether or not it
/// was recognized
#[derive(Debug, Clone, Serialize)]
pub struct KdsStatusChange {
    pub order_id: String,
    pub order_number: String,
    pub status: OrderStatus,
    pub previous: OrderStatus,
}

/// Kitchen display event envelope
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum KdsEvent {
    #[serde(rename = "new-kds-order")]
    NewKdsOrder(KdsOrderView),
    #[serde(rename = "order_updated")]
    OrderUpdated(KdsStatusChange),
}

/// Broadcast hub shared by all kitchen display connections
#[derive(Debug, Clone)]
pub struct KdsHub {
    tx: broadcast::Sender<KdsEvent>,
}

impl KdsHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self { tx }
    }

    /// Subscribe a new observer
    pub fn subscribe(&self) -> broadcast::Receiver<KdsEvent> {
        self.tx.subscribe()
    }

    /// Currently connected observers
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publish an event to all observers; no observers means no-op
    pub fn publish(&self, event: KdsEvent) {
        // send only errors when there are no receivers
        let _ = self.tx.send(event);
    }
}

impl Default for KdsHub {
    fn default() -> Self {
        Self::new()
    }
}
