use std::{env, path::Path, path::PathBuf};

pub mod cli;
pub mod config;
pub mod error;
pub mod password;
pub mod security;
pub mod session;
pub mod ui;

pub const DEFAULT_CONFIG_PATH: &str = ".config/pwgen/config.json";

/// The config file, from `PWGEN_CONFIG` or under the user's home
pub fn config_path() -> PathBuf {
    if let Ok(path) = env::var("PWGEN_CONFIG") {
        PathBuf::from(path)
    } else {
        let user_home = env::var("HOME").unwrap_or_default();
        Path::new(&user_home).join(DEFAULT_CONFIG_PATH)
    }
}
