pub mod auth_store;
pub mod game_data;

pub use auth_store::*;
pub use game_data::*;
