//! Command-line surface: `classroom-api serve` and
//! `classroom-api migrate <up|down|status|fresh>`.

pub mod args;

pub use args::{Cli, Commands};
