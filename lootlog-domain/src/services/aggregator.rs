use std::collections::HashMap;

use crate::entities::ItemStack;
use crate::value_objects::ItemId;

/// Combines stacks sharing an item id into one stack with the summed
/// quantity. Output follows first-seen order; a merged stack keeps the
/// location of the last raw stack for its id. Quantities are not validated;
/// a sum past `i32::MAX` clamps there, matching the payload's `i32` qty.
pub fn aggregate(items: &[ItemStack]) -> Vec<ItemStack> {
    let mut positions: HashMap<ItemId, usize> = HashMap::with_capacity(items.len());
    let mut stacked: Vec<ItemStack> = Vec::with_capacity(items.len());

    for item in items {
        match positions.get(&item.id) {
            Some(&index) => {
                let entry = &mut stacked[index];
                entry.quantity = entry.quantity.saturating_add(item.quantity);
                entry.location = item.location;
            }
            None => {
                positions.insert(item.id, stacked.len());
                stacked.push(item.clone());
            }
        }
    }

    stacked
}
