use crate::error::DeskError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub inventory: InventorySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Root URL of the invoicing backend (e.g., http://127.0.0.1:5000).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClientSettings {
    /// User agent of the device the desk runs on; decides how generated documents open.
    #[serde(default)]
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// OTLP collector endpoint (e.g., http://tempo:4317). Spans are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventorySettings {
    /// Path prefix under which the inventory routes are mounted.
    #[serde(default = "default_inventory_prefix")]
    pub prefix: String,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            prefix: default_inventory_prefix(),
        }
    }
}

fn default_inventory_prefix() -> String {
    "/inventory".to_string()
}

impl Settings {
    /// Load `configuration.*` from the working directory (optional) with `APP_*` overrides.
    pub fn load() -> Result<Self, DeskError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
