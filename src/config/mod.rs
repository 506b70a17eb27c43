//! Configuration: environment-derived settings plus the constants shared
//! by handlers and infrastructure.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
