//! Host Stand - table management for a restaurant host
//!
//! This crate clocks servers in, seats parties at tables by size, tracks how
//! long each table has been occupied and gives a rough wait estimate. The
//! console in [`session`] drives everything from a text menu.

pub mod config;
pub mod error;
pub mod floor;
pub mod seating;
pub mod session;
pub mod types;
pub mod utils;
pub mod wait_time;

// Re-export commonly used types
pub use error::{HostError, Result};
pub use types::*;

// Re-export key components
pub use floor::{ServerRoster, TableRegistry};
pub use seating::SeatingEngine;
pub use session::{Console, RestaurantSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
