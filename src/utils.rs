//! Utility functions for the host stand

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique session ID
pub fn generate_session_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Minutes from `start` to `end`, never negative
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let elapsed = end.signed_duration_since(start);
    let millis = elapsed.num_milliseconds().max(0);
    millis as f64 / 60_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_session_id();
        let id2 = generate_session_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_minutes_between() {
        let start = current_timestamp();
        assert_eq!(minutes_between(start, start), 0.0);
        assert_eq!(minutes_between(start, start + Duration::minutes(3)), 3.0);
        assert_eq!(minutes_between(start, start + Duration::seconds(90)), 1.5);
    }

    #[test]
    fn test_minutes_between_clamps_backwards_clock() {
        let start = current_timestamp();
        assert_eq!(minutes_between(start, start - Duration::minutes(5)), 0.0);
    }
}
