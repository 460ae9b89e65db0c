//! Error types for the host stand
//!
//! Every operation on the floor returns a typed [`HostError`] so the console
//! can tell an unknown server apart from a full one without reading messages.

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HostError>;

/// Recoverable failures raised while running the host stand
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("{name} is already clocked in.")]
    DuplicateServer { name: String },

    #[error("Invalid server name: {name}")]
    UnknownServer { name: String },

    #[error("{server} cannot handle any more tables.")]
    CapacityExceeded { server: String },

    #[error("No suitable tables available for a party of {party_size}.")]
    NoSuitableTables { party_size: u32 },

    #[error("Table not found: {label}")]
    UnknownTable { label: String },
}

impl HostError {
    /// Shorthand for an [`HostError::InvalidInput`] with the given reason
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        HostError::InvalidInput {
            reason: reason.into(),
        }
    }
}
