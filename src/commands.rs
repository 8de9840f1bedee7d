//! Additional CLI subcommands.
pub mod generate;
