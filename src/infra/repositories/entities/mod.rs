//! SeaORM entity definitions
//!
//! Stored-row shapes, kept apart from the domain records they map to.

pub mod product;
pub mod user;
