use lootlog_domain::NpcLootReceived;
use tokio::sync::{mpsc, RwLock};

/// In-process stand-in for the host event bus. Every subscriber receives
/// every published loot event, in publish order.
#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<Vec<mpsc::UnboundedSender<NpcLootReceived>>>,
}

impl EventBus {
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<NpcLootReceived> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.write().await.push(tx);
        rx
    }

    /// Returns how many subscribers took the event.
    pub async fn publish(&self, event: &NpcLootReceived) -> usize {
        let mut subscribers = self.subscribers.write().await;
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        subscribers.len()
    }

    /// Ends every subscription once queued events are drained.
    pub async fn close(&self) {
        self.subscribers.write().await.clear();
    }
}
