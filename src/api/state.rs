//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::{Database, StudentRoster};

/// Database handle plus the process-wide student roster.
///
/// Handlers never touch the pool directly; they receive a
/// [`Session`](crate::infra::Session) opened from it per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub database: Arc<Database>,
    /// In-memory roster, empty at startup
    pub roster: Arc<StudentRoster>,
}

impl AppState {
    pub fn new(database: Arc<Database>) -> Self {
        Self {
            database,
            roster: Arc::new(StudentRoster::new()),
        }
    }
}
