//! Comanda Server - multi-tenant restaurant ordering backend
//!
//! # Architecture overview
//!
//! - **HTTP API** (`api`): public customer-facing REST endpoints
//! - **Database** (`db`): SurrealDB storage, models and repositories
//! - **Pricing** (`pricing`): authoritative server-side order pricing
//! - **Orders** (`orders`): order creation and status transitions
//! - **Notifications** (`notify`): kitchen display broadcast and customer
//!   messaging
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer
//! ├── pricing/       # money math and price resolution
//! ├── orders/        # order domain
//! ├── notify/        # KDS hub and messenger
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod notify;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState, build_app, build_router};
pub use orders::OrderService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging from the resulting environment
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine; the environment may be set externally
    let _ = dotenv::dotenv();

    // Log level comes from RUST_LOG via the env filter
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______                                 __
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
