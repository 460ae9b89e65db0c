//! Common types used throughout the host stand

use crate::error::HostError;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a running host session
pub type SessionId = Uuid;

/// Name a server clocks in under (case-sensitive)
pub type ServerName = String;

/// Dining room section a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    A,
    B,
    C,
    D,
}

impl Section {
    /// All sections in floor order
    pub const ALL: [Section; 4] = [Section::A, Section::B, Section::C, Section::D];

    pub fn letter(self) -> char {
        match self {
            Section::A => 'A',
            Section::B => 'B',
            Section::C => 'C',
            Section::D => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Section::A),
            'B' => Some(Section::B),
            'C' => Some(Section::C),
            'D' => Some(Section::D),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Label of a table such as `B4`
///
/// A label is only a name. Whether a table with that label exists on the
/// floor is decided by the [`TableRegistry`](crate::floor::TableRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableLabel {
    pub section: Section,
    pub number: u8,
}

impl TableLabel {
    pub const fn new(section: Section, number: u8) -> Self {
        Self { section, number }
    }
}

impl fmt::Display for TableLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section, self.number)
    }
}

impl FromStr for TableLabel {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let section = chars
            .next()
            .and_then(Section::from_letter)
            .ok_or_else(|| HostError::invalid_input(format!("bad table label '{}'", s)))?;
        let number = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| HostError::invalid_input(format!("bad table label '{}'", s)))?;
        Ok(Self::new(section, number))
    }
}

/// Outcome of a successful seating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub party_size: u32,
    pub tables: Vec<TableLabel>,
    pub server: ServerName,
    /// Server's table count after this assignment
    pub server_load: u32,
}

impl Assignment {
    /// Comma separated table list, e.g. `D2, D3`
    pub fn table_list(&self) -> String {
        join_labels(&self.tables)
    }
}

/// Join labels for display
pub fn join_labels(labels: &[TableLabel]) -> String {
    labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
