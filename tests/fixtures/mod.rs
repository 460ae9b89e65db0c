//! Test fixtures for driving the host stand end to end

#![allow(dead_code)]

use host_stand::config::ConsoleSettings;
use host_stand::floor::ManualClock;
use host_stand::{Console, RestaurantSession, TableLabel};
use std::io::Cursor;
use std::sync::Arc;

/// Session on a manual clock so table times are predictable
pub fn session_with_clock() -> (RestaurantSession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    (RestaurantSession::with_clock(clock.clone()), clock)
}

/// Session with the given servers already clocked in
pub fn staffed_session(servers: &[&str]) -> RestaurantSession {
    let mut session = RestaurantSession::new();
    for name in servers {
        session.clock_in(name).expect("clock in");
    }
    session
}

/// Feed `script` to the console line by line and return everything it printed
pub fn run_console(session: &mut RestaurantSession, script: &[&str]) -> String {
    let mut input = script.join("\n");
    input.push('\n');

    let settings = ConsoleSettings {
        clear_screen: false,
        show_server_load: true,
    };
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new(), settings);
    console.run(session).expect("console run");
    String::from_utf8(console.into_output()).expect("utf8 output")
}

/// Seat a party with a fixed server choice
pub fn seat(
    session: &mut RestaurantSession,
    party_size: u32,
    server: &str,
) -> host_stand::Result<host_stand::Assignment> {
    session.seat_party(party_size, |_| Ok(server.to_string()))
}

pub fn label(s: &str) -> TableLabel {
    s.parse().expect("table label")
}

pub fn labels(list: &[&str]) -> Vec<TableLabel> {
    list.iter().map(|s| label(s)).collect()
}
