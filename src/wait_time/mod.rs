//! Wait time estimation for parties arriving at the host stand

pub mod estimator;

// Re-export commonly used types
pub use estimator::{TieredWaitTimeEstimator, WaitTimeEstimator, WAIT_TIERS_MINUTES};
