//! Shared library modules providing error types, file utilities, process helpers, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod paths;
pub mod process;
pub mod telemetry;
