//! Notification fan-out
//!
//! On order creation and on every status transition, events go to all
//! connected kitchen displays through [`KdsHub`]; customer text messages
//! go through [`MessengerService`] when it is configured. Both paths are
//! best-effort: a failed message is logged and swallowed, never affecting
//! the HTTP result. Callers run these functions in a detached task.

pub mod hub;
pub mod messenger;

pub use hub::{KdsEvent, KdsHub, KdsOrderView, KdsStatusChange};
pub use messenger::MessengerService;

use crate::core::ServerState;
use crate::db::models::{Order, OrderStatus};
use crate::orders::status::customer_update;

/// Fan out a freshly created order
pub async fn order_created(state: ServerState, order: Order) {
    state
        .kds
        .publish(KdsEvent::NewKdsOrder(KdsOrderView::from_order(&order)));

    if let Some(messenger) = &state.messenger {
        let body = order_summary(&order);
        if let Err(e) = messenger.send_text(&order.phone_number, &body).await {
            tracing::warn!(
                order_number = %order.order_number,
                error = %e,
                "Customer order confirmation failed"
            );
        }
    }
}

/// Fan out a status change
///
/// The kitchen display broadcast happens for every transition; the
/// customer message only for the recognized ones.
pub async fn status_changed(state: ServerState, order: Order, previous: OrderStatus) {
    state.kds.publish(KdsEvent::OrderUpdated(KdsStatusChange {
        order_id: order.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        order_number: order.order_number.clone(),
        status: order.status,
        previous,
    }));

    if let Some(messenger) = &state.messenger
        && let Some(body) = customer_update(previous, order.status, &order.order_number)
        && let Err(e) = messenger.send_text(&order.phone_number, &body).await
    {
        tracing::warn!(
            order_number = %order.order_number,
            from = %previous,
            to = %order.status,
            error = %e,
            "Customer status notification failed"
        );
    }
}

/// Human-readable order confirmation text
pub fn order_summary(order: &Order) -> String {
    let mut text = format!(
        "Hi {}! Your order {} has been received.\n\n",
        order.customer_name, order.order_number
    );
    for line in &order.items {
        if line.customizations.is_empty() {
            text.push_str(&format!(
                "{}x {} - {:.2}\n",
                line.quantity, line.name, line.line_total
            ));
        } else {
            let opts: Vec<&str> = line.customizations.iter().map(|c| c.name.as_str()).collect();
            text.push_str(&format!(
                "{}x {} ({}) - {:.2}\n",
                line.quantity,
                line.name,
                opts.join(", "),
                line.line_total
            ));
        }
    }
    text.push_str(&format!(
        "\nSubtotal: {:.2}\nTax: {:.2}\nTotal: {:.2}\n\nWe'll message you when your order is being prepared.",
        order.subtotal, order.tax, order.total
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OrderLine;
    use chrono::Utc;

    #[test]
    fn summary_lists_lines_and_totals() {
        let order = Order {
            id: None,
            restaurant: "restaurant:r1".parse().unwrap(),
            order_number: "ORD-1234".to_string(),
            customer_name: "Ana".to_string(),
            phone_number: "612345678".to_string(),
            order_source: "walk-in".to_string(),
            items: vec![OrderLine {
                id: "menu_item:fries".to_string(),
                name: "Fries".to_string(),
                price: 3.5,
                quantity: 2,
                customizations: vec![],
                special_notes: None,
                line_total: 7.0,
            }],
            subtotal: 7.0,
            tax: 0.56,
            total: 7.56,
            notes: None,
            status: crate::db::models::OrderStatus::New,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let text = order_summary(&order);
        assert!(text.contains("Hi Ana!"));
        assert!(text.contains("ORD-1234"));
        assert!(text.contains("2x Fries - 7.00"));
        assert!(text.contains("Total: 7.56"));
    }
}
