pub mod aggregator;
pub mod payload;

pub use aggregator::*;
pub use payload::*;
