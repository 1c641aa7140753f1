// Domain entities
pub mod composition;
pub mod host_action;
pub mod loot;
pub mod notice;
pub mod record;
pub mod runtime_config;

pub use composition::*;
pub use host_action::*;
pub use loot::*;
pub use notice::*;
pub use record::*;
pub use runtime_config::*;
