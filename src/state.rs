//! Application state management
//!
//! Contains shared state accessible across all handlers.
//! DATABASE-ONLY: All storage is backed by PostgreSQL, no in-memory fallbacks.

use crate::db::service::TodoService;
use deadpool_postgres::Pool;
use std::sync::Arc;

/// Application state shared across all handlers
/// All operations require a valid database connection
pub struct AppState {
    /// Todo service for database operations (required)
    pub todos: TodoService,
}

impl AppState {
    /// Create new application state with database pool (the only way)
    pub fn new(pool: Pool) -> Self {
        Self {
            todos: TodoService::new(pool),
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
