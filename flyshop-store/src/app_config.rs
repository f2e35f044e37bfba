use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub flights: FlightsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    #[serde(default)]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 { 5 }

fn default_acquire_timeout() -> u64 { 3 }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FlightsConfig {
    /// JSON file with the flight schedule. The built-in schedule is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&layer("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&layer(&run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&layer("local")).required(false))
            // Eg.. `FLYSHOP__SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("FLYSHOP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
