pub mod context;
pub mod lifecycle;
mod replay;

pub use lifecycle::{run_replay, run_standalone};
