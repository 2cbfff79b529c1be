/*
[INPUT]:  Public API exports for the dydx-v3-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point shared by the binary and tests
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

pub use commands::{Command, PRIVATE_KEY_ENV, run};
pub use config::CliConfig;
