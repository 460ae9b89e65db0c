//! The fixed set of tables on the floor

use crate::error::{HostError, Result};
use crate::floor::timer::{Clock, SystemClock, Timer};
use crate::types::{join_labels, Section, ServerName, TableLabel};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Highest table number in each section
pub const TABLES_PER_SECTION: u8 = 5;

/// Total number of tables on the floor
pub const TABLE_COUNT: usize = Section::ALL.len() * TABLES_PER_SECTION as usize;

/// A single table and who, if anyone, is serving it
#[derive(Debug, Clone)]
pub struct Table {
    label: TableLabel,
    server: Option<ServerName>,
    timer: Timer,
}

impl Table {
    fn new(label: TableLabel) -> Self {
        Self {
            label,
            server: None,
            timer: Timer::new(),
        }
    }

    pub fn label(&self) -> TableLabel {
        self.label
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn is_free(&self) -> bool {
        self.server.is_none()
    }

    fn occupy(&mut self, server: &str, clock: &dyn Clock) {
        self.server = Some(server.to_string());
        self.timer.arm(clock);
    }
}

/// Registry of every table on the floor, keyed by label
///
/// Built once with tables A1 through D5. Membership never changes afterwards;
/// only occupancy does.
pub struct TableRegistry {
    tables: BTreeMap<TableLabel, Table>,
    clock: Arc<dyn Clock>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let tables = Section::ALL
            .iter()
            .flat_map(|&section| {
                (1..=TABLES_PER_SECTION).map(move |number| TableLabel::new(section, number))
            })
            .map(|label| (label, Table::new(label)))
            .collect();

        Self { tables, clock }
    }

    pub fn get(&self, label: TableLabel) -> Option<&Table> {
        self.tables.get(&label)
    }

    pub fn contains(&self, label: TableLabel) -> bool {
        self.tables.contains_key(&label)
    }

    /// True if the table exists and nobody is serving it
    pub fn is_free(&self, label: TableLabel) -> bool {
        self.get(label).is_some_and(Table::is_free)
    }

    /// True if every table in `labels` exists and is free
    pub fn all_free(&self, labels: &[TableLabel]) -> bool {
        labels.iter().all(|&label| self.is_free(label))
    }

    /// Tables in floor order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn free_tables(&self) -> impl Iterator<Item = TableLabel> + '_ {
        self.iter().filter(|t| t.is_free()).map(Table::label)
    }

    pub fn has_free_table(&self) -> bool {
        self.iter().any(Table::is_free)
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|t| !t.is_free()).count()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Seat `server` at every table in `labels` and start their timers
    ///
    /// Callers check that the group is free first. Unknown labels are refused
    /// before anything is touched.
    pub fn assign(&mut self, labels: &[TableLabel], server: &str) -> Result<()> {
        if let Some(missing) = labels.iter().find(|&&label| !self.contains(label)) {
            return Err(HostError::UnknownTable {
                label: missing.to_string(),
            });
        }

        for label in labels {
            if let Some(table) = self.tables.get_mut(label) {
                table.occupy(server, self.clock.as_ref());
            }
        }

        debug!("Tables {} now served by {}", join_labels(labels), server);
        Ok(())
    }

    /// Minutes the table has been occupied, 0 for free or unknown tables
    pub fn elapsed_minutes(&self, label: TableLabel) -> f64 {
        self.get(label)
            .map(|t| t.timer.elapsed_minutes(self.clock.as_ref()))
            .unwrap_or(0.0)
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRegistry")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}
