//! Runtime configuration, loaded from the environment.

use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote data API.
    pub api_base_url: String,
    /// Capacity of the draft store's request channel.
    pub draft_buffer: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base_url: try_load("SNACKBAR_API_URL", "http://localhost:5256/"),
            draft_buffer: try_load("SNACKBAR_DRAFT_BUFFER", "32"),
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
