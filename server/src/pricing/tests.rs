use rust_decimal::Decimal;
use serde_json::json;

use super::money::{round2, to_decimal, to_f64};
use super::resolver::{OrderLineRequest, coerce_quantity};

#[test]
fn to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    assert_ne!(a + b, 0.3);

    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn accumulation_precision() {
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += to_decimal(0.01);
    }
    assert_eq!(to_f64(total), 10.0);
}

#[test]
fn round2_is_half_up() {
    assert_eq!(to_f64(to_decimal(1.005)), 1.01);
    assert_eq!(round2(to_decimal(1.844)), to_decimal(1.84));
    assert_eq!(round2(to_decimal(1.845)), to_decimal(1.85));
}

#[test]
fn non_finite_input_defaults_to_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
}

#[test]
fn quantity_coercion_is_lenient() {
    // Absent or junk values default to 1, never reject
    assert_eq!(coerce_quantity(None), 1);
    assert_eq!(coerce_quantity(Some(&json!(null))), 1);
    assert_eq!(coerce_quantity(Some(&json!("abc"))), 1);
    assert_eq!(coerce_quantity(Some(&json!({}))), 1);

    // Non-positive values clamp to 1
    assert_eq!(coerce_quantity(Some(&json!(0))), 1);
    assert_eq!(coerce_quantity(Some(&json!(-3))), 1);

    // Numeric and numeric-string values parse, fractions truncate
    assert_eq!(coerce_quantity(Some(&json!(4))), 4);
    assert_eq!(coerce_quantity(Some(&json!(2.7))), 2);
    assert_eq!(coerce_quantity(Some(&json!("5"))), 5);
    assert_eq!(coerce_quantity(Some(&json!(" 3 "))), 3);
}

#[test]
fn line_request_ignores_client_price_fields() {
    // A forged price field is dropped at deserialization; only id,
    // quantity, customizations and special_notes survive.
    let raw = json!({
        "id": "menu_item:burger",
        "quantity": 2,
        "price": 0.01,
        "name": "Free Burger",
        "customizations": [{"id": "customization_option:cheese", "price": 0.0}]
    });
    let line: OrderLineRequest = serde_json::from_value(raw).unwrap();
    assert_eq!(line.id, "menu_item:burger");
    assert_eq!(coerce_quantity(line.quantity.as_ref()), 2);
    assert_eq!(line.customizations.len(), 1);
    assert_eq!(line.customizations[0].id, "customization_option:cheese");
}
