use tracing::debug;

use lootlog_domain::{
    aggregate, describe_items, render_payload, ChatNotice, ItemStack, LootRecord, NpcId,
    PAYLOAD_VERSION,
};

use crate::{AppError, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootOutcome {
    /// Too many endpoint failures this session; nothing was built or sent.
    Disabled,
    MissingAuthCode,
    Dispatched,
}

pub fn process_loot(
    state: &AppState,
    npc_id: NpcId,
    items: &[ItemStack],
) -> Result<LootOutcome, AppError> {
    if state.sender.errors().has_reached(state.config.error_threshold) {
        for notice in ChatNotice::disabled() {
            state.notifier.add_chat_message(notice);
        }
        return Ok(LootOutcome::Disabled);
    }

    let Some(auth_code) = state.auth_store.auth_code().filter(|code| !code.is_empty()) else {
        return Ok(LootOutcome::MissingAuthCode);
    };

    let player = state
        .game_client
        .local_player_name()
        .ok_or(AppError::MissingContext("local player"))?;
    let npc = state
        .game_client
        .npc_definition(npc_id)
        .ok_or(AppError::MissingContext("npc definition"))?;

    let stacked = aggregate(items);
    let record = LootRecord {
        version: PAYLOAD_VERSION.to_string(),
        player,
        enemy_id: npc_id,
        enemy_name: npc.name,
        enemy_level: npc.combat_level,
        auth_code,
        items: describe_items(&stacked, state.item_catalog.as_ref()),
    };
    debug!(
        "submitting {} stacks from npc {} ({} raw)",
        record.items.len(),
        npc_id,
        items.len()
    );

    state.sender.send(render_payload(&record));
    Ok(LootOutcome::Dispatched)
}
