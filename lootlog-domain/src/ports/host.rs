use async_trait::async_trait;

use crate::entities::{ChatNotice, HostAction, ItemComposition, NpcComposition};
use crate::value_objects::{ItemId, NpcId};

/// Lookups served by the running game client.
pub trait GameClient: Send + Sync {
    fn local_player_name(&self) -> Option<String>;
    fn npc_definition(&self, npc_id: NpcId) -> Option<NpcComposition>;
}

pub trait ItemCatalog: Send + Sync {
    /// Never fails; unknown ids yield [`ItemComposition::unknown`].
    fn item_composition(&self, item_id: ItemId) -> ItemComposition;
    fn item_price(&self, item_id: ItemId) -> i64;
}

/// Writes to the in-client message feed. Only called on the client thread.
pub trait ChatNotifier: Send + Sync {
    fn add_chat_message(&self, notice: ChatNotice);
}

/// Schedules an action on the host's client thread. Callable from any task;
/// the action runs later, in submission order.
pub trait ClientThread: Send + Sync {
    fn invoke(&self, action: HostAction);
}

#[async_trait]
pub trait AuthCodeStore: Send + Sync {
    fn auth_code(&self) -> Option<String>;
    async fn clear_auth_code(&self) -> anyhow::Result<()>;
}
