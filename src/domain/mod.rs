//! Domain layer - Entity schemas
//!
//! Each persisted entity declares one field set (the creation payload),
//! a patch type for partial updates, and a `Record` alias carrying the
//! generated identity. No infrastructure types leak in here.

pub mod product;
pub mod record;
pub mod user;

pub use product::{Product, ProductFields, ProductPatch};
pub use record::Record;
pub use user::{User, UserFields, UserPatch};
