// File-backed host lookups: local player, NPC and item definitions.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use lootlog_domain::{GameClient, ItemCatalog, ItemComposition, ItemId, NpcComposition, NpcId};

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub ha_price: i32,
    #[serde(default)]
    pub ge_price: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GameDataFile {
    player_name: Option<String>,
    items: Vec<ItemDefinition>,
    npcs: Vec<NpcComposition>,
}

#[derive(Debug, Default)]
pub struct StaticGameData {
    player_name: Option<String>,
    items: HashMap<ItemId, ItemDefinition>,
    npcs: HashMap<NpcId, NpcComposition>,
}

impl StaticGameData {
    pub async fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            warn!("game data {} not found, lookups will be empty", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: GameDataFile = serde_json::from_str(content)?;
        Ok(Self {
            player_name: file.player_name,
            items: file.items.into_iter().map(|item| (item.id, item)).collect(),
            npcs: file.npcs.into_iter().map(|npc| (npc.id, npc)).collect(),
        })
    }

    pub fn with_player_name(mut self, player_name: Option<String>) -> Self {
        if player_name.is_some() {
            self.player_name = player_name;
        }
        self
    }
}

impl GameClient for StaticGameData {
    fn local_player_name(&self) -> Option<String> {
        self.player_name.clone()
    }

    fn npc_definition(&self, npc_id: NpcId) -> Option<NpcComposition> {
        self.npcs.get(&npc_id).cloned()
    }
}

impl ItemCatalog for StaticGameData {
    fn item_composition(&self, item_id: ItemId) -> ItemComposition {
        match self.items.get(&item_id) {
            Some(item) => ItemComposition {
                id: item.id,
                name: item.name.clone(),
                ha_price: item.ha_price,
            },
            None => ItemComposition::unknown(item_id),
        }
    }

    fn item_price(&self, item_id: ItemId) -> i64 {
        self.items.get(&item_id).map(|item| item.ge_price).unwrap_or_default()
    }
}
