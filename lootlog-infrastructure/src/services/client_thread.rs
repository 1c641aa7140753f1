use tokio::sync::mpsc;
use tracing::debug;

use lootlog_domain::{ClientThread, HostAction};

/// Queues host actions for the client thread task. Safe to call from
/// transport completion tasks.
#[derive(Clone)]
pub struct ClientThreadQueue {
    tx: mpsc::UnboundedSender<HostAction>,
}

impl ClientThreadQueue {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HostAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ClientThread for ClientThreadQueue {
    fn invoke(&self, action: HostAction) {
        if let Err(err) = self.tx.send(action) {
            debug!("client thread gone, dropping {:?}", err.0);
        }
    }
}
