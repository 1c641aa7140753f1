// Client thread entry points. Nothing raised here may reach the host.

use tracing::{debug, warn};

use lootlog_domain::{HostAction, NpcLootReceived};

use crate::commands::loot_commands::process_loot;
use crate::AppState;

pub fn on_npc_loot_received(state: &AppState, event: &NpcLootReceived) {
    match process_loot(state, event.npc_id, &event.items) {
        Ok(outcome) => debug!("loot from npc {}: {:?}", event.npc_id, outcome),
        Err(err) => debug!("dropping loot from npc {}: {}", event.npc_id, err),
    }
}

/// Applies an action queued through [`AppState::client_thread`].
pub async fn run_host_action(state: &AppState, action: HostAction) {
    match action {
        HostAction::Notice(notice) => state.notifier.add_chat_message(notice),
        HostAction::ClearAuthCode => {
            if let Err(err) = state.auth_store.clear_auth_code().await {
                warn!("failed to clear rejected auth code: {:#}", err);
            }
        }
    }
}
