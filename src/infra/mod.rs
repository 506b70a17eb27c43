//! Infrastructure layer - External systems integration
//!
//! - Database connection pool and migrations
//! - Repositories over SeaORM entities
//! - Request-scoped sessions (one transaction per request)
//! - The in-memory student roster

pub mod db;
pub mod repositories;
pub mod roster;
pub mod session;

pub use db::{Database, MigrationStatus, Migrator};
pub use repositories::{ProductRepository, ProductStore, UserRepository, UserStore};
pub use roster::{Student, StudentRoster};
pub use session::Session;
