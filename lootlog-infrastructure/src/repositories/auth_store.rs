use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use lootlog_domain::AuthCodeStore;

pub const CONFIG_GROUP: &str = "osrslootlogger";
pub const AUTH_CODE_KEY: &str = "authCode";

type Settings = BTreeMap<String, BTreeMap<String, String>>;

/// Grouped key/value settings persisted as TOML tables, one table per group.
pub struct FileSettingsStore {
    path: PathBuf,
    settings: RwLock<Settings>,
}

impl FileSettingsStore {
    /// `seed_auth_code` is used only while the file holds no auth code entry;
    /// a stored empty value (cleared after a rejection) wins over the seed.
    pub async fn load(path: impl Into<PathBuf>, seed_auth_code: Option<String>) -> Result<Self> {
        let path = path.into();
        let mut settings: Settings = if path.exists() {
            let content = fs::read_to_string(&path).await?;
            toml::from_str(&content)?
        } else {
            Settings::new()
        };
        if let Some(code) = seed_auth_code {
            settings
                .entry(CONFIG_GROUP.to_string())
                .or_default()
                .entry(AUTH_CODE_KEY.to_string())
                .or_insert(code);
        }
        Ok(Self {
            path,
            settings: RwLock::new(settings),
        })
    }

    pub fn get_configuration(&self, group: &str, key: &str) -> Option<String> {
        let settings = self.settings.read().unwrap_or_else(PoisonError::into_inner);
        settings.get(group).and_then(|entries| entries.get(key)).cloned()
    }

    pub async fn set_configuration(&self, group: &str, key: &str, value: &str) -> Result<()> {
        let content = {
            let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            settings
                .entry(group.to_string())
                .or_default()
                .insert(key.to_string(), value.to_string());
            toml::to_string(&*settings)?
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthCodeStore for FileSettingsStore {
    fn auth_code(&self) -> Option<String> {
        self.get_configuration(CONFIG_GROUP, AUTH_CODE_KEY)
    }

    async fn clear_auth_code(&self) -> Result<()> {
        self.set_configuration(CONFIG_GROUP, AUTH_CODE_KEY, "").await?;
        info!("cleared rejected auth code in {}", self.path.display());
        Ok(())
    }
}
