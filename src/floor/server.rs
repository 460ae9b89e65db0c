//! Servers and the clocked-in roster

use crate::error::{HostError, Result};
use crate::types::ServerName;
use tracing::{info, warn};

/// Table slots a server is rated for
pub const SERVER_CAPACITY: u32 = 6;

/// A staff member and the number of seatings they are handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    name: ServerName,
    tables_handled: u32,
}

impl Server {
    pub fn new(name: impl Into<ServerName>) -> Self {
        Self {
            name: name.into(),
            tables_handled: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tables_handled(&self) -> u32 {
        self.tables_handled
    }

    /// Whether another seating may be handed to this server
    ///
    /// Compares with `<=`, so a server at capacity still accepts one more
    /// seating and tops out at `SERVER_CAPACITY + 1`.
    pub fn can_take_more(&self) -> bool {
        self.tables_handled <= SERVER_CAPACITY
    }

    /// Strictly below capacity. Used for wait estimates.
    pub fn has_spare_capacity(&self) -> bool {
        self.tables_handled < SERVER_CAPACITY
    }

    /// Count one more seating against this server
    pub fn take_table(&mut self) -> Result<()> {
        if !self.can_take_more() {
            return Err(HostError::CapacityExceeded {
                server: self.name.clone(),
            });
        }
        self.tables_handled += 1;
        Ok(())
    }
}

/// Clocked-in servers in clock-in order
#[derive(Debug, Clone, Default)]
pub struct ServerRoster {
    servers: Vec<Server>,
}

impl ServerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock a server in under `name`, stored exactly as given
    pub fn clock_in(&mut self, name: &str) -> Result<&Server> {
        if name.trim().is_empty() {
            return Err(HostError::invalid_input("server name cannot be empty"));
        }
        if self.contains(name) {
            warn!("Rejected duplicate clock-in for {}", name);
            return Err(HostError::DuplicateServer {
                name: name.to_string(),
            });
        }

        self.servers.push(Server::new(name));
        info!("{} clocked in ({} on the floor)", name, self.servers.len());

        let idx = self.servers.len() - 1;
        Ok(&self.servers[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Server> {
        self.servers.iter_mut().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Server> {
        self.servers.iter()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// True if at least one server is strictly under capacity
    pub fn any_spare_capacity(&self) -> bool {
        self.servers.iter().any(Server::has_spare_capacity)
    }
}
