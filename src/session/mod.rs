//! Host session state and the interactive console that drives it

pub mod controller;
pub mod prompt;
pub mod state;

// Re-export commonly used types
pub use controller::{Console, MenuChoice};
pub use prompt::Prompt;
pub use state::{RestaurantSession, TableTime};
