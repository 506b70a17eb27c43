//! Classroom API - user and product records over HTTP
//!
//! Two persisted resources with full CRUD, backed by a relational store
//! through SeaORM, plus a set of stateless request handling drills.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Record types and payload validation
//! - **infra**: Database, migrations, repositories, sessions, roster
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Product, User};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Session};
