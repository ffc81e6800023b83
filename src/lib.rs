//! Library crate root re-exporting CLI, configuration, and pipeline modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod pipeline;
