//! CLI command handlers.

pub mod apps;
pub mod config;
pub mod resolve;

pub use apps::run_apps;
pub use config::run_config_show;
pub use resolve::{ResolveCommandInput, run_resolve};
