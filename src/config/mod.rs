use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{ShopError, ShopResult};

const DEFAULT_CONCURRENCY: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub concurrency: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> ShopResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> ShopResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("MRT_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("MRT_CONCURRENCY") {
            let concurrency: usize = raw.trim().parse().map_err(|_| {
                ShopError::Config(format!("MRT_CONCURRENCY is not a number: {}", raw))
            })?;
            if concurrency == 0 {
                return Err(ShopError::Config(
                    "MRT_CONCURRENCY must be at least 1".to_string(),
                ));
            }
            config.concurrency = concurrency;
        }

        if let Some(raw) = lookup("MRT_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ShopError::Config(format!("MRT_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(agent) = lookup("MRT_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("mrt-shops/{}", env!("CARGO_PKG_VERSION"))
}
