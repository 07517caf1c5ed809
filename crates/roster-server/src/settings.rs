//! Server settings
//!
//! Read from the process environment (and a `.env` file when present) on top
//! of built-in defaults.

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Which `Store` implementation backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mysql,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub db_max_connections: u32,
    pub bind_host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub cors_origin: String,
    /// Request body cap for multipart uploads
    pub max_upload_bytes: usize,
    pub store: StoreBackend,
}

impl Settings {
    /// Load `.env` (if any), then the environment over the defaults
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::info!("Loaded environment from {}", path.display());
        }
        Self::from_environment(Environment::default())
    }

    pub fn from_environment(env: Environment) -> Result<Self> {
        with_defaults(Config::builder())?
            .add_source(env)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Where uploaded employee photos are written
    pub fn images_dir(&self) -> PathBuf {
        self.static_dir.join("images")
    }
}

fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>> {
    Ok(builder
        .set_default("db_host", "localhost")?
        .set_default("db_user", "root")?
        .set_default("db_password", "")?
        .set_default("db_name", "test")?
        .set_default("db_port", 3306)?
        .set_default("db_max_connections", 5)?
        .set_default("bind_host", "0.0.0.0")?
        .set_default("port", 4000)?
        .set_default("static_dir", "public")?
        .set_default("cors_origin", "http://localhost:5173")?
        .set_default("max_upload_bytes", 10 * 1024 * 1024)?
        .set_default("store", "mysql")?)
}
