// Domain value objects
pub mod identifiers;
pub mod webhook_response;

pub use identifiers::*;
pub use webhook_response::*;
