// Replay host: feeds JSON-lines loot events onto the event bus.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use lootlog_application::ops::EventBus;
use lootlog_domain::NpcLootReceived;

/// Publishes each valid line of `reader`, bumping `published` as it goes so
/// the count survives the future being dropped mid-stream.
pub async fn replay_events<R>(bus: &EventBus, reader: R, published: &mut usize) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.split(b'\n');
    while let Some(raw) = lines.next_segment().await? {
        let Ok(line) = std::str::from_utf8(&raw) else {
            warn!(
                "skipping loot event with invalid UTF-8: {}",
                String::from_utf8_lossy(&raw)
            );
            continue;
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(event) = parse_loot_event(line) else {
            warn!("skipping malformed loot event: {}", line);
            continue;
        };
        bus.publish(&event).await;
        *published += 1;
    }
    Ok(())
}

fn parse_loot_event(raw: &str) -> Option<NpcLootReceived> {
    serde_json::from_str(raw).ok()
}
