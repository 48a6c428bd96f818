//! CLI command handlers.

mod power;
mod show_config;

pub use power::{run_action, run_power};
pub use show_config::run_show_config;
