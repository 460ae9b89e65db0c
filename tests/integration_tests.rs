//! Integration tests for the host stand
//!
//! These drive the public session API and the console together:
//! - clocking in and seating scenarios
//! - server capacity limits
//! - large party groupings
//! - wait estimates and table timers

mod fixtures;

use chrono::Duration;
use host_stand::floor::SERVER_CAPACITY;
use host_stand::HostError;

use fixtures::{label, labels, run_console, seat, session_with_clock, staffed_session};

#[test]
fn test_first_party_gets_first_table() {
    let mut session = staffed_session(&["Amy"]);

    let assignment = seat(&mut session, 4, "Amy").unwrap();

    assert_eq!(assignment.tables, labels(&["A1"]));
    assert_eq!(assignment.server, "Amy");
    assert_eq!(session.roster().find("Amy").unwrap().tables_handled(), 1);
}

#[test]
fn test_capacity_allows_seventh_and_refuses_eighth() {
    let mut session = staffed_session(&["Amy"]);

    for _ in 0..SERVER_CAPACITY {
        seat(&mut session, 2, "Amy").unwrap();
    }
    assert_eq!(session.roster().find("Amy").unwrap().tables_handled(), 6);

    let seventh = seat(&mut session, 2, "Amy").unwrap();
    assert_eq!(seventh.server_load, 7);

    let eighth = seat(&mut session, 2, "Amy").unwrap_err();
    assert_eq!(
        eighth,
        HostError::CapacityExceeded {
            server: "Amy".to_string()
        }
    );
    assert_eq!(session.registry().occupied_count(), 7);
}

#[test]
fn test_party_of_ten_takes_d2_d3_for_one_slot() {
    let mut session = staffed_session(&["Amy", "Bo"]);
    seat(&mut session, 3, "Bo").unwrap();

    let assignment = seat(&mut session, 10, "Amy").unwrap();

    assert_eq!(assignment.tables, labels(&["D2", "D3"]));
    assert_eq!(assignment.server_load, 1);
    for l in ["D2", "D3"] {
        assert_eq!(
            session.registry().get(label(l)).unwrap().server(),
            Some("Amy")
        );
    }
}

#[test]
fn test_large_party_falls_through_to_missing_block() {
    let mut session = staffed_session(&["Amy"]);
    seat(&mut session, 8, "Amy").unwrap();

    // D2/D3 are taken, and the second block names tables the floor lacks
    let err = seat(&mut session, 14, "Amy").unwrap_err();
    assert_eq!(err, HostError::NoSuitableTables { party_size: 14 });
}

#[test]
fn test_rejected_server_does_not_try_next_group() {
    let mut session = staffed_session(&["Amy"]);

    let err = seat(&mut session, 9, "Nobody").unwrap_err();
    assert!(matches!(err, HostError::UnknownServer { .. }));
    assert_eq!(session.registry().occupied_count(), 0);
    assert!(session.registry().is_free(label("D4")));
}

#[test]
fn test_wait_estimate_progression() {
    let mut session = staffed_session(&["Amy"]);
    assert_eq!(session.wait_minutes(), 0);

    for _ in 0..SERVER_CAPACITY {
        seat(&mut session, 2, "Amy").unwrap();
    }
    // Amy is saturated with six tables seated
    assert_eq!(session.wait_minutes(), 60);

    seat(&mut session, 2, "Amy").unwrap();
    assert_eq!(session.wait_minutes(), 90);
}

#[test]
fn test_table_timer_tracks_occupancy() {
    let (mut session, clock) = session_with_clock();
    session.clock_in("Amy").unwrap();
    seat(&mut session, 12, "Amy").unwrap();

    clock.advance(Duration::minutes(45));

    let times = session.table_times();
    let d2 = times.iter().find(|t| t.label == label("D2")).unwrap();
    let d4 = times.iter().find(|t| t.label == label("D4")).unwrap();
    assert_eq!(d2.elapsed_minutes, 45.0);
    assert_eq!(d2.server.as_deref(), Some("Amy"));
    assert_eq!(d4.elapsed_minutes, 0.0);
    assert!(d4.server.is_none());
}

#[test]
fn test_console_full_shift() {
    let (mut session, clock) = session_with_clock();

    let out = run_console(
        &mut session,
        &[
            "1", "Amy", "Bo", "done", // clock in
            "5", "4", "Amy", "10", "Bo", "20", "0", // seat three parties
            "3", "x", // wait time
            "6",
        ],
    );

    assert!(out.contains("Amy clocked in"));
    assert!(out.contains("Assigned tables A1 to Amy"));
    assert!(out.contains("Assigned tables D2, D3 to Bo"));
    assert!(out.contains("No suitable tables available for a party of 20."));
    assert!(out.contains("Current wait time: 0 minutes"));

    clock.advance(Duration::minutes(2));
    let out = run_console(&mut session, &["4", "x", "2", "x", "6"]);
    assert!(out.contains("A1: 2.00 minutes (Amy)"));
    assert!(out.contains("D3: 2.00 minutes (Bo)"));
    assert!(out.contains("B1: -"));
    assert!(out.contains(" - Amy (1 tables)"));
}

#[test]
fn test_console_reports_capacity() {
    let mut session = staffed_session(&["Amy"]);
    for _ in 0..=SERVER_CAPACITY {
        seat(&mut session, 2, "Amy").unwrap();
    }

    let out = run_console(&mut session, &["5", "2", "Amy", "0", "6"]);
    assert!(out.contains("Amy cannot handle any more tables."));
}
