mod config;
mod window_config;

pub use config::{Config, get_config_manager, get_config_path};
pub use window_config::WindowConfig;
