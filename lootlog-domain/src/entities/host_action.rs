// Work handed back to the host's client thread
// Completion tasks never touch host state themselves

use crate::entities::ChatNotice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Write a line to the in-client message feed.
    Notice(ChatNotice),
    /// Blank the stored auth code after the endpoint rejected it.
    ClearAuthCode,
}
