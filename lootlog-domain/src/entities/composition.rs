// Host-side definitions looked up while building a loot record

use serde::{Deserialize, Serialize};

use crate::value_objects::{ItemId, NpcId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcComposition {
    pub id: NpcId,
    pub name: String,
    #[serde(default)]
    pub combat_level: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemComposition {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub ha_price: i32,
}

impl ItemComposition {
    /// What the host hands back for an id it has no definition for.
    pub fn unknown(id: ItemId) -> Self {
        Self {
            id,
            name: "null".to_string(),
            ha_price: 0,
        }
    }
}
