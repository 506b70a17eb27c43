//! Implementations behind the `serve` and `migrate` subcommands.

pub mod migrate;
pub mod serve;
