// Payload rendering for the logging endpoint.
//
// Every value is written as a quoted JSON string, numbers included, and the
// spacing matches what the endpoint's parser has always received.

use serde_json::Value;

use crate::entities::{ItemStack, LootRecord, LootRecordItem};
use crate::ports::ItemCatalog;

pub fn describe_items(stacks: &[ItemStack], catalog: &dyn ItemCatalog) -> Vec<LootRecordItem> {
    stacks
        .iter()
        .map(|stack| {
            let definition = catalog.item_composition(stack.id);
            LootRecordItem {
                id: stack.id,
                name: definition.name,
                qty: stack.quantity,
                ha: definition.ha_price,
                ge: catalog.item_price(stack.id),
            }
        })
        .collect()
}

pub fn render_payload(record: &LootRecord) -> String {
    let mut out = String::with_capacity(256 + record.items.len() * 96);
    out.push_str("{ ");
    push_field(&mut out, "version", &record.version, true);
    push_field(&mut out, "player", &record.player, true);
    push_field(&mut out, "enemyId", &record.enemy_id.to_string(), true);
    push_field(&mut out, "enemyName", &record.enemy_name, true);
    push_field(&mut out, "enemyLevel", &record.enemy_level.to_string(), true);
    push_field(&mut out, "authCode", &record.auth_code, true);

    out.push_str("\"items\" : { ");
    for (index, item) in record.items.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&quoted(&(index + 1).to_string()));
        out.push_str(" :  { ");
        push_field(&mut out, "id", &item.id.to_string(), true);
        push_field(&mut out, "name", &item.name, true);
        push_field(&mut out, "qty", &item.qty.to_string(), true);
        push_field(&mut out, "ha", &item.ha.to_string(), true);
        push_field(&mut out, "ge", &item.ge.to_string(), false);
        out.push_str(" }");
    }
    out.push_str(" } }");
    out
}

fn push_field(out: &mut String, key: &str, value: &str, trailing_comma: bool) {
    out.push_str(&quoted(key));
    out.push_str(" : ");
    out.push_str(&quoted(value));
    if trailing_comma {
        out.push_str(", ");
    }
}

fn quoted(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
