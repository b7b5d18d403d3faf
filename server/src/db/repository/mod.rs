//! Repository Module
//!
//! CRUD access to SurrealDB tables. One repository per table, all sharing
//! [`BaseRepository`].
//!
//! # ID convention
//!
//! The API accepts both `"table:id"` and bare-key forms; repositories
//! normalize with [`pure_key`] before building record ids. Record link
//! fields are stored in the string form `"table:id"` (see
//! `models::serde_helpers`), so link comparisons bind strings while `id`
//! comparisons bind native `RecordId` values.

pub mod category;
pub mod customization;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use category::CategoryRepository;
pub use customization::CustomizationRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use restaurant::RestaurantRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

/// Strip a `"table:"` prefix if present, returning the bare record key
///
/// Keys that start with a digit display as `table:⟨key⟩`, so the angle
/// brackets are stripped too.
pub fn pure_key<'a>(table: &str, id: &'a str) -> &'a str {
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);
    key.strip_prefix('⟨')
        .and_then(|k| k.strip_suffix('⟩'))
        .unwrap_or(key)
}

/// Canonical string form of a record link: `"table:key"`
///
/// Goes through [`RecordId`] display so the result matches stored link
/// strings exactly, escaping included.
pub fn link(table: &str, id: &str) -> String {
    RecordId::from_table_key(table, pure_key(table, id)).to_string()
}
