//! Environment-driven server configuration.

use lifehub_core::default_log_level;
use log::{info, warn};
use std::{env, fmt::Display, str::FromStr};

pub struct Config {
    pub port: u16,
    pub log_level: String,
    /// Absolute directory for rotated log files; stderr when unset.
    pub log_dir: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("LIFEHUB_PORT", "5000"),
            log_level: env::var("LIFEHUB_LOG_LEVEL")
                .unwrap_or_else(|_| default_log_level().to_string()),
            log_dir: env::var("LIFEHUB_LOG_DIR").ok(),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
