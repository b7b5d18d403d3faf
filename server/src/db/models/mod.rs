//! Database Models
//!
//! One module per table; record links serialize as "table:id" strings.

pub mod serde_helpers;

pub mod category;
pub mod customization;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use category::Category;
pub use customization::{CustomizationCategory, CustomizationOption};
pub use menu_item::MenuItem;
pub use order::{LineCustomization, Order, OrderCreate, OrderLine, OrderStatus};
pub use restaurant::{Restaurant, RestaurantSettings};
