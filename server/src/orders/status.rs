//! Order status transitions and customer message templates
//!
//! Only three transitions carry a customer-facing message; everything else
//! is a silent state change (still broadcast to kitchen displays by the
//! fan-out layer).

use crate::db::models::OrderStatus;

/// Customer message for a recognized status transition
///
/// Returns `None` for every unrecognized pair, including out-of-order
/// jumps like new→completed.
pub fn customer_update(
    previous: OrderStatus,
    next: OrderStatus,
    order_number: &str,
) -> Option<String> {
    use OrderStatus::*;
    match (previous, next) {
        (New, Preparing) => Some(format!(
            "Your order {order_number} is confirmed and being prepared. \
             We'll message you when it's ready!"
        )),
        (Preparing, Ready) => Some(format!(
            "Your order {order_number} is ready for pickup!"
        )),
        (Ready, Completed) => Some(format!(
            "Thanks for your order {order_number}! We hope to see you again soon."
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn recognized_transitions_have_templates() {
        let msg = customer_update(New, Preparing, "ORD-1234").unwrap();
        assert!(msg.contains("ORD-1234"));
        assert!(msg.contains("prepared"));

        assert!(customer_update(Preparing, Ready, "ORD-1234").is_some());
        assert!(customer_update(Ready, Completed, "ORD-1234").is_some());
    }

    #[test]
    fn skipping_states_sends_nothing() {
        assert!(customer_update(New, Completed, "ORD-1234").is_none());
        assert!(customer_update(New, Ready, "ORD-1234").is_none());
        assert!(customer_update(Preparing, Completed, "ORD-1234").is_none());
    }

    #[test]
    fn backwards_and_identity_send_nothing() {
        assert!(customer_update(Ready, Preparing, "ORD-1234").is_none());
        assert!(customer_update(New, New, "ORD-1234").is_none());
        assert!(customer_update(New, Confirmed, "ORD-1234").is_none());
    }
}
