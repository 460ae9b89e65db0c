//! Seating parties: candidate table groups and the assignment engine
//!
//! Party size decides which groups are considered. The engine takes the first
//! fully free group and hands it to a server with room left.

pub mod engine;
pub mod groups;

// Re-export commonly used types
pub use engine::SeatingEngine;
pub use groups::{
    CandidateProvider, FixedFloorPlan, PartyBand, LARGE_PARTY_GROUPS, MEDIUM_PARTY_GROUPS,
};
