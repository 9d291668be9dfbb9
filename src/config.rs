use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Admin API key for write routes (writes are disabled when unset)
    pub api_key: Option<String>,

    // Database (in-memory store when unset)
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // Seed translations: <seed_dir>/<lang>/<namespace>.json
    pub seed_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            api_key: None,
            database_url: None,
            database_max_connections: 5,
            seed_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            port: parse_var("PORT")?.unwrap_or(defaults.port),

            api_key: non_empty_var("API_KEY"),

            database_url: non_empty_var("DATABASE_URL"),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.database_max_connections),

            seed_dir: non_empty_var("SEED_DIR").map(PathBuf::from),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty_var(name)
        .map(|v| {
            v.parse::<T>()
                .with_context(|| format!("{} has an invalid value: '{}'", name, v))
        })
        .transpose()
}
