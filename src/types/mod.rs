//! Response helpers shared across handlers.

mod response;

pub use response::{Created, MessageResponse};
