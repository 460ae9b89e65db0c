//! Seating parties at tables
//!
//! Seating is split in two steps so the host can be asked for a server only
//! once a free group has been found:
//!
//! 1. [`SeatingEngine::find_free_group`] walks the candidate groups and
//!    returns the first one whose tables are all free.
//! 2. [`SeatingEngine::commit`] checks the chosen server and, if they can
//!    take the seating, occupies every table in the group.
//!
//! A group consumes one slot of the server's capacity no matter how many
//! tables it spans.

use crate::error::{HostError, Result};
use crate::floor::{ServerRoster, TableRegistry};
use crate::seating::groups::{CandidateProvider, FixedFloorPlan};
use crate::types::{join_labels, Assignment, TableLabel};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Matches parties to tables and servers
#[derive(Clone)]
pub struct SeatingEngine {
    provider: Arc<dyn CandidateProvider>,
}

impl SeatingEngine {
    /// Engine over the fixed floor plan
    pub fn new() -> Self {
        Self::with_provider(Arc::new(FixedFloorPlan::new()))
    }

    pub fn with_provider(provider: Arc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }

    /// First candidate group for `party_size` whose tables are all free
    pub fn find_free_group(
        &self,
        party_size: u32,
        registry: &TableRegistry,
    ) -> Result<Vec<TableLabel>> {
        if party_size == 0 {
            return Err(HostError::invalid_input("party size must be positive"));
        }

        for group in self.provider.candidate_groups(party_size, registry) {
            if registry.all_free(&group) {
                debug!(
                    "Party of {} can sit at {}",
                    party_size,
                    join_labels(&group)
                );
                return Ok(group);
            }
            debug!("Group {} is not free", join_labels(&group));
        }

        warn!("No suitable tables for a party of {}", party_size);
        Err(HostError::NoSuitableTables { party_size })
    }

    /// Give `group` to `server_name`
    ///
    /// Fails without touching anything if the server is not clocked in, has
    /// no room left, or the group stopped being free.
    pub fn commit(
        &self,
        party_size: u32,
        group: &[TableLabel],
        server_name: &str,
        registry: &mut TableRegistry,
        roster: &mut ServerRoster,
    ) -> Result<Assignment> {
        let server = roster.find_mut(server_name).ok_or_else(|| {
            warn!("Seating refused: {} is not clocked in", server_name);
            HostError::UnknownServer {
                name: server_name.to_string(),
            }
        })?;

        if group.is_empty() || !registry.all_free(group) {
            return Err(HostError::NoSuitableTables { party_size });
        }

        if let Err(e) = server.take_table() {
            warn!("Seating refused: {}", e);
            return Err(e);
        }
        let server_load = server.tables_handled();

        registry.assign(group, server_name)?;

        info!(
            "Seated party of {} at {} with {} (now handling {})",
            party_size,
            join_labels(group),
            server_name,
            server_load
        );

        Ok(Assignment {
            party_size,
            tables: group.to_vec(),
            server: server_name.to_string(),
            server_load,
        })
    }

    /// Find a group and commit it to the server `choose_server` names
    ///
    /// `choose_server` is only called once a free group exists. If the chosen
    /// server is rejected no other group is tried.
    pub fn seat_party<F>(
        &self,
        party_size: u32,
        registry: &mut TableRegistry,
        roster: &mut ServerRoster,
        choose_server: F,
    ) -> Result<Assignment>
    where
        F: FnOnce(&[TableLabel]) -> Result<String>,
    {
        let group = self.find_free_group(party_size, registry)?;
        let server_name = choose_server(&group)?;
        self.commit(party_size, &group, &server_name, registry, roster)
    }
}

impl Default for SeatingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SeatingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingEngine").finish_non_exhaustive()
    }
}
