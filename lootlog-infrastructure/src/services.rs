pub mod chat_notifier;
pub mod client_thread;
pub mod webhook_transport;

pub use chat_notifier::*;
pub use client_thread::*;
pub use webhook_transport::*;
