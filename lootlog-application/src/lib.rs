// Loot Logger Application Layer

pub mod commands;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod ops;
pub mod sender;
pub mod state;

pub use error::AppError;
pub use metrics::ErrorCounter;
pub use sender::WebhookSender;
pub use state::AppState;

#[cfg(test)]
pub(crate) mod test_support;
