//! CLI command handlers.

pub mod config;
pub mod demo;
pub mod emit;

pub use config::{ConfigFormat, run_config_show};
pub use demo::run_demo;
pub use emit::{EmitCommandInput, run_emit};
