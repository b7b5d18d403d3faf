//! Database Module
//!
//! Connects to the store through SurrealDB's `any` engine so the same code
//! runs against `mem://` (tests, local dev) and `ws://host:port` (remote
//! store with a root credential).

pub mod models;
pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;

/// Database service, owns the store connection
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect, authenticate if the endpoint requires it, and select the
    /// namespace/database from config.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = surrealdb::engine::any::connect(&config.db_endpoint)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to store: {e}")))?;

        // Embedded engines (mem://) reject signin; only remote endpoints
        // carry a credential.
        if let (Some(username), Some(password)) = (&config.db_username, &config.db_password) {
            db.signin(Root { username, password })
                .await
                .map_err(|e| AppError::database(format!("Store authentication failed: {e}")))?;
        }

        db.use_ns(&config.db_namespace)
            .use_db(&config.db_database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            endpoint = %config.db_endpoint,
            namespace = %config.db_namespace,
            database = %config.db_database,
            "Store connection established"
        );

        Ok(Self { db })
    }
}
