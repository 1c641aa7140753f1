// Loot record entity
// The payload submitted for one loot event, built fresh and never retained

use crate::value_objects::{ItemId, NpcId};

pub const PAYLOAD_VERSION: &str = "0.3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootRecord {
    pub version: String,
    pub player: String,
    pub enemy_id: NpcId,
    pub enemy_name: String,
    pub enemy_level: i32,
    pub auth_code: String,
    pub items: Vec<LootRecordItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootRecordItem {
    pub id: ItemId,
    pub name: String,
    pub qty: i32,
    /// High alchemy value.
    pub ha: i32,
    /// Grand Exchange price.
    pub ge: i64,
}
