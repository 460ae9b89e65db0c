//! The restaurant session: all state for one run of the host stand
//!
//! A session is built once at startup, handed to the console by `&mut`, and
//! dropped on exit. Nothing outlives it.

use crate::error::Result;
use crate::floor::{Clock, Server, ServerRoster, SystemClock, TableRegistry};
use crate::seating::SeatingEngine;
use crate::types::{Assignment, ServerName, SessionId, TableLabel};
use crate::utils::generate_session_id;
use crate::wait_time::{TieredWaitTimeEstimator, WaitTimeEstimator};
use std::sync::Arc;
use std::time::Duration;

/// Occupancy line for one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableTime {
    pub label: TableLabel,
    pub server: Option<ServerName>,
    pub elapsed_minutes: f64,
}

/// Servers on the floor plus the tables they work
pub struct RestaurantSession {
    id: SessionId,
    roster: ServerRoster,
    registry: TableRegistry,
    engine: SeatingEngine,
    estimator: Box<dyn WaitTimeEstimator>,
}

impl RestaurantSession {
    /// Fresh session on the wall clock: 20 free tables, nobody clocked in
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_components(
            TableRegistry::with_clock(clock),
            SeatingEngine::new(),
            Box::new(TieredWaitTimeEstimator::new()),
        )
    }

    pub fn with_components(
        registry: TableRegistry,
        engine: SeatingEngine,
        estimator: Box<dyn WaitTimeEstimator>,
    ) -> Self {
        Self {
            id: generate_session_id(),
            roster: ServerRoster::new(),
            registry,
            engine,
            estimator,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn roster(&self) -> &ServerRoster {
        &self.roster
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    pub fn clock_in(&mut self, name: &str) -> Result<&Server> {
        self.roster.clock_in(name)
    }

    /// First free candidate group for a party
    pub fn find_free_group(&self, party_size: u32) -> Result<Vec<TableLabel>> {
        self.engine.find_free_group(party_size, &self.registry)
    }

    /// Hand a group found by [`find_free_group`](Self::find_free_group) to a server
    pub fn commit(
        &mut self,
        party_size: u32,
        group: &[TableLabel],
        server_name: &str,
    ) -> Result<Assignment> {
        self.engine.commit(
            party_size,
            group,
            server_name,
            &mut self.registry,
            &mut self.roster,
        )
    }

    /// Seat a party in one call, asking `choose_server` once a group is free
    pub fn seat_party<F>(&mut self, party_size: u32, choose_server: F) -> Result<Assignment>
    where
        F: FnOnce(&[TableLabel]) -> Result<String>,
    {
        self.engine
            .seat_party(party_size, &mut self.registry, &mut self.roster, choose_server)
    }

    pub fn wait_time(&self) -> Duration {
        self.estimator.estimate(&self.registry, &self.roster)
    }

    /// Whole minutes of the current wait estimate
    pub fn wait_minutes(&self) -> u64 {
        self.wait_time().as_secs() / 60
    }

    /// Occupancy of every table in floor order
    pub fn table_times(&self) -> Vec<TableTime> {
        self.registry
            .iter()
            .map(|table| TableTime {
                label: table.label(),
                server: table.server().map(str::to_string),
                elapsed_minutes: self.registry.elapsed_minutes(table.label()),
            })
            .collect()
    }
}

impl Default for RestaurantSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RestaurantSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantSession")
            .field("id", &self.id)
            .field("roster", &self.roster)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
