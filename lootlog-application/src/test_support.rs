// In-memory host collaborators for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lootlog_domain::ports::{
    AuthCodeStore, ChatNotifier, ClientThread, GameClient, ItemCatalog, WebhookTransport,
};
use lootlog_domain::{
    ChatNotice, HostAction, ItemComposition, ItemId, NpcComposition, NpcId, RuntimeConfig,
};

use crate::handlers::run_host_action;
use crate::AppState;

#[derive(Debug, Clone)]
pub struct TransportCall {
    pub url: String,
    pub field: String,
    pub value: String,
}

pub struct ScriptedTransport {
    status: Option<u16>,
    calls: Mutex<Vec<TransportCall>>,
}

impl ScriptedTransport {
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookTransport for ScriptedTransport {
    async fn post_form(&self, url: &str, field: &str, value: String) -> anyhow::Result<u16> {
        self.calls.lock().unwrap().push(TransportCall {
            url: url.to_string(),
            field: field.to_string(),
            value,
        });
        self.status
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}

pub struct MemoryAuthStore {
    code: Mutex<Option<String>>,
}

impl MemoryAuthStore {
    pub fn with_code(code: &str) -> Self {
        Self {
            code: Mutex::new(Some(code.to_string())),
        }
    }

    pub fn empty() -> Self {
        Self {
            code: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AuthCodeStore for MemoryAuthStore {
    fn auth_code(&self) -> Option<String> {
        self.code.lock().unwrap().clone()
    }

    async fn clear_auth_code(&self) -> anyhow::Result<()> {
        *self.code.lock().unwrap() = Some(String::new());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<ChatNotice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<ChatNotice> {
        self.notices.lock().unwrap().clone()
    }
}

impl ChatNotifier for RecordingNotifier {
    fn add_chat_message(&self, notice: ChatNotice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Holds queued host actions until a test plays the client thread.
#[derive(Default)]
pub struct RecordingClientThread {
    actions: Mutex<Vec<HostAction>>,
}

impl RecordingClientThread {
    pub fn take(&self) -> Vec<HostAction> {
        std::mem::take(&mut *self.actions.lock().unwrap())
    }
}

impl ClientThread for RecordingClientThread {
    fn invoke(&self, action: HostAction) {
        self.actions.lock().unwrap().push(action);
    }
}

pub struct StaticClient {
    player: Mutex<Option<String>>,
    npcs: HashMap<NpcId, NpcComposition>,
}

impl StaticClient {
    pub fn logged_out(&self) {
        *self.player.lock().unwrap() = None;
    }
}

impl Default for StaticClient {
    fn default() -> Self {
        let goblin = NpcComposition {
            id: NpcId(3029),
            name: "Goblin".to_string(),
            combat_level: 5,
        };
        Self {
            player: Mutex::new(Some("Zezima".to_string())),
            npcs: HashMap::from([(goblin.id, goblin)]),
        }
    }
}

impl GameClient for StaticClient {
    fn local_player_name(&self) -> Option<String> {
        self.player.lock().unwrap().clone()
    }

    fn npc_definition(&self, npc_id: NpcId) -> Option<NpcComposition> {
        self.npcs.get(&npc_id).cloned()
    }
}

impl ItemCatalog for StaticClient {
    fn item_composition(&self, item_id: ItemId) -> ItemComposition {
        match item_id.0 {
            995 => ItemComposition {
                id: item_id,
                name: "Coins".to_string(),
                ha_price: 0,
            },
            1050 => ItemComposition {
                id: item_id,
                name: "Santa hat".to_string(),
                ha_price: 90,
            },
            _ => ItemComposition::unknown(item_id),
        }
    }

    fn item_price(&self, item_id: ItemId) -> i64 {
        match item_id.0 {
            995 => 1,
            1050 => 1_250_000,
            _ => 0,
        }
    }
}

pub struct Fixture {
    pub state: AppState,
    pub client: Arc<StaticClient>,
    pub auth: Arc<MemoryAuthStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub client_thread: Arc<RecordingClientThread>,
}

impl Fixture {
    /// Waits for in-flight submissions, then runs what they queued for the
    /// client thread.
    pub async fn settle(&self) {
        self.state.sender.flush().await;
        for action in self.client_thread.take() {
            run_host_action(&self.state, action).await;
        }
    }
}

pub fn state_with(transport: Arc<ScriptedTransport>, auth_code: Option<&str>) -> Fixture {
    let client = Arc::new(StaticClient::default());
    let auth = Arc::new(match auth_code {
        Some(code) => MemoryAuthStore::with_code(code),
        None => MemoryAuthStore::empty(),
    });
    let notifier = Arc::new(RecordingNotifier::default());
    let client_thread = Arc::new(RecordingClientThread::default());
    let state = AppState::new(
        RuntimeConfig {
            endpoint_url: "http://127.0.0.1:9/?add".to_string(),
            ..RuntimeConfig::default()
        },
        client.clone(),
        client.clone(),
        auth.clone(),
        notifier.clone(),
        client_thread.clone(),
        transport,
    );
    Fixture {
        state,
        client,
        auth,
        notifier,
        client_thread,
    }
}
