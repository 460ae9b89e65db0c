//! Candidate table groups for a party
//!
//! Large parties are seated at fixed pushed-together groupings declared
//! below. Everyone else gets any single free table. Groups are always tried
//! in the order returned here and the first fully free one wins.

use crate::floor::TableRegistry;
use crate::types::{Section, TableLabel};

const fn t(section: Section, number: u8) -> TableLabel {
    TableLabel::new(section, number)
}

/// Two-table groupings for parties of 7 to 12, in preference order
pub const MEDIUM_PARTY_GROUPS: [&[TableLabel]; 5] = [
    &[t(Section::D, 2), t(Section::D, 3)],
    &[t(Section::D, 4), t(Section::D, 5)],
    &[t(Section::A, 3), t(Section::A, 4)],
    &[t(Section::A, 6), t(Section::A, 7)],
    &[t(Section::A, 8), t(Section::A, 9)],
];

/// Four-table groupings for parties of 13 to 24, in preference order
pub const LARGE_PARTY_GROUPS: [&[TableLabel]; 2] = [
    &[
        t(Section::D, 2),
        t(Section::D, 3),
        t(Section::D, 4),
        t(Section::D, 5),
    ],
    &[
        t(Section::A, 6),
        t(Section::A, 7),
        t(Section::A, 8),
        t(Section::A, 9),
    ],
];

/// How a party size maps onto the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyBand {
    /// Seated at any single table (1 to 6, or more than 24)
    SingleTable,
    /// 7 to 12, seated at a fixed pair
    Medium,
    /// 13 to 24, seated at a fixed block of four
    Large,
}

impl PartyBand {
    pub fn for_party(party_size: u32) -> Self {
        match party_size {
            7..=12 => PartyBand::Medium,
            13..=24 => PartyBand::Large,
            _ => PartyBand::SingleTable,
        }
    }
}

/// Supplies the ordered candidate groups for a party
pub trait CandidateProvider: Send + Sync {
    /// Candidate groups for `party_size`, in the order they should be tried
    fn candidate_groups(&self, party_size: u32, registry: &TableRegistry) -> Vec<Vec<TableLabel>>;
}

/// The restaurant's fixed floor plan
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFloorPlan;

impl FixedFloorPlan {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateProvider for FixedFloorPlan {
    fn candidate_groups(&self, party_size: u32, registry: &TableRegistry) -> Vec<Vec<TableLabel>> {
        match PartyBand::for_party(party_size) {
            PartyBand::Medium => MEDIUM_PARTY_GROUPS.iter().map(|g| g.to_vec()).collect(),
            PartyBand::Large => LARGE_PARTY_GROUPS.iter().map(|g| g.to_vec()).collect(),
            PartyBand::SingleTable => registry.free_tables().map(|label| vec![label]).collect(),
        }
    }
}
