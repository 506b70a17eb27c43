//! HTTP request handlers.

pub mod classroom_handler;
pub mod item_handler;
pub mod product_handler;
pub mod registration_handler;
pub mod user_handler;

pub use classroom_handler::classroom_routes;
pub use item_handler::item_routes;
pub use product_handler::product_routes;
pub use registration_handler::registration_routes;
pub use user_handler::user_routes;
