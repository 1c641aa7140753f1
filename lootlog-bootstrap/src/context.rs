use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::warn;

use lootlog_application::AppState;
use lootlog_domain::{AuthCodeStore, HostAction};
use lootlog_infrastructure::{
    AppConfig, ClientThreadQueue, FileSettingsStore, ReqwestWebhookTransport, StaticGameData,
    TracingChatFeed,
};

pub struct AppContext {
    pub state: AppState,
    /// Actions waiting for the client thread.
    pub actions: mpsc::UnboundedReceiver<HostAction>,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();

        let game_data = Arc::new(
            StaticGameData::load(&config.game_data_path)
                .await?
                .with_player_name(config.player_name.clone()),
        );
        let auth_store = Arc::new(
            FileSettingsStore::load(&config.auth_store_path, config.auth_code.clone()).await?,
        );
        if auth_store.auth_code().map_or(true, |code| code.is_empty()) {
            warn!("no auth code configured, loot will not be submitted");
        }

        let (client_thread, actions) = ClientThreadQueue::channel();
        let transport = Arc::new(ReqwestWebhookTransport::new(&runtime_config)?);

        let state = AppState::new(
            runtime_config,
            game_data.clone(),
            game_data,
            auth_store,
            Arc::new(TracingChatFeed),
            Arc::new(client_thread),
            transport,
        );

        Ok(Self { state, actions })
    }
}
