//! Order pricing
//!
//! [`PriceResolver`] turns untrusted client line items into authoritative
//! priced lines; [`money`] holds the decimal conversion helpers.

pub mod money;
pub mod resolver;

pub use resolver::{CustomizationRef, OrderLineRequest, PriceResolver, PricedOrder, coerce_quantity};

#[cfg(test)]
mod tests;
