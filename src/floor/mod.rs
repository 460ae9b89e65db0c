//! The dining room floor: tables, their timers and the servers working them
//!
//! Nothing in here knows about the console. The session and seating modules
//! drive these types.

pub mod server;
pub mod table;
pub mod timer;

// Re-export commonly used types
pub use server::{Server, ServerRoster, SERVER_CAPACITY};
pub use table::{Table, TableRegistry, TABLES_PER_SECTION, TABLE_COUNT};
pub use timer::{Clock, ManualClock, SystemClock, Timer};
