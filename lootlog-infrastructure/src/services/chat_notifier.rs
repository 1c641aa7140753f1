use tracing::info;

use lootlog_domain::{ChatNotice, ChatNotifier};

/// Stand-in for the game chat box: every notice becomes an `info` event on
/// the `chat` target, in game-message markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChatFeed;

impl ChatNotifier for TracingChatFeed {
    fn add_chat_message(&self, notice: ChatNotice) {
        info!(target: "chat", "{}", notice.render());
    }
}
