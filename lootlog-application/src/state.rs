use std::sync::Arc;

use lootlog_domain::ports::{
    AuthCodeStore, ChatNotifier, ClientThread, GameClient, ItemCatalog, WebhookTransport,
};
use lootlog_domain::RuntimeConfig;

use crate::WebhookSender;

/// Host collaborators shared by the client thread. `notifier` and
/// `auth_store` writes happen on the client thread only; other tasks go
/// through `client_thread`.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub game_client: Arc<dyn GameClient>,
    pub item_catalog: Arc<dyn ItemCatalog>,
    pub auth_store: Arc<dyn AuthCodeStore>,
    pub notifier: Arc<dyn ChatNotifier>,
    pub client_thread: Arc<dyn ClientThread>,
    pub sender: WebhookSender,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        game_client: Arc<dyn GameClient>,
        item_catalog: Arc<dyn ItemCatalog>,
        auth_store: Arc<dyn AuthCodeStore>,
        notifier: Arc<dyn ChatNotifier>,
        client_thread: Arc<dyn ClientThread>,
        transport: Arc<dyn WebhookTransport>,
    ) -> Self {
        let sender = WebhookSender::new(
            config.endpoint_url.clone(),
            transport,
            client_thread.clone(),
        );
        Self {
            config,
            game_client,
            item_catalog,
            auth_store,
            notifier,
            client_thread,
            sender,
        }
    }
}
