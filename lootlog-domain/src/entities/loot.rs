// Loot entities
// A loot notification raised by the host when an NPC drops items for the local player

use serde::{Deserialize, Serialize};

use crate::value_objects::{ItemId, NpcId};

/// Tile an item stack landed on. Carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLocation {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub plane: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: ItemId,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<TileLocation>,
}

impl ItemStack {
    pub fn new(id: i32, quantity: i32) -> Self {
        Self {
            id: ItemId(id),
            quantity,
            location: None,
        }
    }

    pub fn at(mut self, location: TileLocation) -> Self {
        self.location = Some(location);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcLootReceived {
    pub npc_id: NpcId,
    #[serde(default)]
    pub items: Vec<ItemStack>,
}
