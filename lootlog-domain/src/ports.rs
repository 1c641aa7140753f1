// Host and Transport Port Traits (Interfaces)
// Define what the domain needs from the host client and the network

pub mod host;
pub mod services;

pub use host::*;
pub use services::*;
