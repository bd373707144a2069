//! Configuration loading and management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sluice_core::ServerUuid;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the companion API.
    pub api_base_url: String,

    /// Server UUID for descriptor and pack-watch requests.
    pub server_id: Option<Uuid>,

    /// Server UUID for resource-collection requests (36-character form).
    pub server_uuid: Option<String>,

    /// Badge cache TTL in seconds (clamped to 10..=3600).
    pub cache_ttl_seconds: u64,

    /// Pack fingerprint check interval in seconds (clamped to 60..=3600).
    pub pack_check_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.dev.sluicee.ru/api/v1".to_string(),
            server_id: None,
            server_uuid: None,
            cache_ttl_seconds: 60,
            pack_check_interval_seconds: 300,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SLUICE_*)
        figment = figment.merge(Env::prefixed("SLUICE_"));

        figment.extract()
    }

    /// Badge cache TTL, clamped to the supported range.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds.clamp(10, 3600))
    }

    /// Pack check interval, clamped to the supported range.
    pub fn pack_check_interval(&self) -> Duration {
        Duration::from_secs(self.pack_check_interval_seconds.clamp(60, 3600))
    }

    /// The configured server ID, or an error naming the missing key.
    pub fn server_id(&self) -> anyhow::Result<Uuid> {
        self.server_id.context("server_id is not configured")
    }

    /// The configured collection server UUID, validated.
    pub fn server_uuid(&self) -> anyhow::Result<ServerUuid> {
        let raw = self
            .server_uuid
            .as_deref()
            .context("server_uuid is not configured")?;
        Ok(ServerUuid::new(raw)?)
    }
}

/// Returns the platform-specific config directory for sluice.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sluice"))
}
