//! Server state - dependency-injected service handles
//!
//! `ServerState` holds the process-wide singletons (store connection,
//! kitchen display hub, messaging client). Everything is cheaply clonable,
//! so handlers and background tasks each take their own copy; tests build
//! a state over `mem://` and substitute nothing else.

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;
use crate::notify::{KdsHub, MessengerService};
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Store connection
    pub db: Surreal<Any>,
    /// Kitchen display broadcast hub
    pub kds: KdsHub,
    /// Customer messaging client; `None` when not configured
    pub messenger: Option<MessengerService>,
}

impl ServerState {
    /// Initialize all services from config
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(config).await?;

        let messenger = MessengerService::from_config(config);
        if messenger.is_none() {
            tracing::info!("Customer messaging disabled (gateway credentials not configured)");
        }

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            kds: KdsHub::new(),
            messenger,
        })
    }

    /// Get the store connection
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.clone()
    }
}
