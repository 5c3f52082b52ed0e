pub mod classify;
pub mod config;
pub mod goals;
pub mod show;

pub use classify::{classify_statements, read_statements, run_classify};
pub use config::{handle_config_command, ConfigCommand};
pub use goals::run_goals;
pub use show::run_show;
