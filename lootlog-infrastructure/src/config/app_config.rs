use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use lootlog_domain::{RuntimeConfig, DEFAULT_ENDPOINT_URL, DEFAULT_ERROR_THRESHOLD};

use crate::config::validate_endpoint_url;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint_url: String,
    /// Seeds the auth store when it has no stored value yet.
    pub auth_code: Option<String>,
    pub auth_store_path: String,
    pub game_data_path: String,
    /// Overrides the local player name found in the game data file.
    pub player_name: Option<String>,
    pub error_threshold: u32,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            auth_code: None,
            auth_store_path: "./settings.toml".to_string(),
            game_data_path: "./game_data.json".to_string(),
            player_name: None,
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("LOOTLOG_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path)).await
    }

    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.endpoint_url = self.endpoint_url.trim().to_string();
        if let Some(code) = &self.auth_code {
            if code.trim().is_empty() {
                self.auth_code = None;
            }
        }
        if let Some(name) = &self.player_name {
            if name.trim().is_empty() {
                self.player_name = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.auth_store_path = resolve_path(base, &self.auth_store_path);
        self.game_data_path = resolve_path(base, &self.game_data_path);
    }

    pub fn validate(&self) -> Result<()> {
        validate_endpoint_url(&self.endpoint_url)?;
        if self.error_threshold == 0 {
            return Err(anyhow!("error_threshold must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.auth_store_path.trim().is_empty() {
            return Err(anyhow!("auth_store_path must not be empty"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            endpoint_url: self.endpoint_url.clone(),
            error_threshold: self.error_threshold,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("LOOTLOG_ENDPOINT_URL") {
            self.endpoint_url = value;
        }
        if let Ok(value) = env::var("LOOTLOG_AUTH_CODE") {
            self.auth_code = Some(value);
        }
        if let Ok(value) = env::var("LOOTLOG_AUTH_STORE_PATH") {
            self.auth_store_path = value;
        }
        if let Ok(value) = env::var("LOOTLOG_GAME_DATA_PATH") {
            self.game_data_path = value;
        }
        if let Ok(value) = env::var("LOOTLOG_PLAYER_NAME") {
            self.player_name = Some(value);
        }
        if let Ok(value) = env::var("LOOTLOG_ERROR_THRESHOLD") {
            self.error_threshold = value.parse().unwrap_or(self.error_threshold);
        }
        if let Ok(value) = env::var("LOOTLOG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint_url, "https://osrs.anthd.com/?add");
        assert_eq!(config.error_threshold, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn normalize_drops_blank_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            endpoint_url = "  http://127.0.0.1:8080/?add "
            auth_code = "   "
            player_name = ""
            "#,
        )
        .expect("parse");
        config.normalize();
        assert_eq!(config.endpoint_url, "http://127.0.0.1:8080/?add");
        assert!(config.auth_code.is_none());
        assert!(config.player_name.is_none());
    }

    #[test]
    fn validate_rejects_zero_threshold() {
        let config = AppConfig {
            error_threshold: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn load_resolves_paths_relative_to_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            auth_code = "abc"
            game_data_path = "data/game.json"
            error_threshold = 3
            "#,
        )
        .expect("write");

        let config = AppConfig::load_from(&path).await.expect("load");
        assert_eq!(config.auth_code.as_deref(), Some("abc"));
        assert_eq!(config.error_threshold, 3);
        assert_eq!(
            Path::new(&config.game_data_path),
            dir.path().join("data/game.json")
        );
        assert_eq!(
            Path::new(&config.auth_store_path),
            dir.path().join("settings.toml")
        );
        assert_eq!(config.to_runtime_config().error_threshold, 3);
    }
}
