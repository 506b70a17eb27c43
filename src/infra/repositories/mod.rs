//! Repository layer - Data access abstraction
//!
//! Repositories are handed out by a `Session` and borrow its transaction,
//! so they cannot outlive the request that opened it.

pub(crate) mod entities;
mod product_repository;
mod user_repository;

pub use product_repository::{ProductRepository, ProductStore};
pub use user_repository::{UserRepository, UserStore};
