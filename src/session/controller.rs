//! Menu-driven console for the host stand
//!
//! Maps menu choices onto [`RestaurantSession`] calls and prints the results.
//! Errors from the session are shown to the host and the loop carries on.

use crate::config::ConsoleSettings;
use crate::session::prompt::{Prompt, INVALID_INPUT};
use crate::session::state::RestaurantSession;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, info_span};

const BANNER: &str = "========== Restaurant Host System ==========";

/// Whether the console should keep going after a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ClockIn,
    ViewServers,
    WaitTime,
    TableTimes,
    AssignTable,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ClockIn),
            2 => Some(MenuChoice::ViewServers),
            3 => Some(MenuChoice::WaitTime),
            4 => Some(MenuChoice::TableTimes),
            5 => Some(MenuChoice::AssignTable),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    prompt: Prompt<R, W>,
    settings: ConsoleSettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            prompt: Prompt::new(input, output, settings.clear_screen),
            settings,
        }
    }

    /// Run the main menu until the host exits or input runs out
    pub fn run(&mut self, session: &mut RestaurantSession) -> io::Result<()> {
        let span = info_span!("session", id = %session.id());
        let _guard = span.enter();
        info!("Host stand open");

        loop {
            self.prompt.clear()?;
            self.prompt.say(format!("{}\n", BANNER))?;
            self.print_menu()?;

            let Some(choice) = self.prompt.ask_integer("\nEnter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::from_number(choice) {
                Some(MenuChoice::ClockIn) => self.clock_in_servers(session)?,
                Some(MenuChoice::ViewServers) => self.view_servers(session)?,
                Some(MenuChoice::WaitTime) => self.show_wait_time(session)?,
                Some(MenuChoice::TableTimes) => self.view_table_times(session)?,
                Some(MenuChoice::AssignTable) => self.assign_table(session)?,
                Some(MenuChoice::Exit) => {
                    self.prompt.clear()?;
                    Flow::Exit
                }
                None => {
                    debug!("Unknown menu choice {}", choice);
                    self.prompt.say(INVALID_INPUT)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!(
            "Host stand closed with {} servers and {} tables occupied",
            session.roster().len(),
            session.registry().occupied_count()
        );
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.prompt.say("1.) Clock In Servers")?;
        self.prompt.say("2.) View Servers")?;
        self.prompt.say("3.) Calculate Wait Time")?;
        self.prompt.say("4.) View Table Times")?;
        self.prompt.say("5.) Assign Table")?;
        self.prompt.say("6.) Exit")
    }

    /// Wait for `X` before going back to the menu
    fn back_to_menu(&mut self) -> io::Result<Flow> {
        loop {
            let Some(answer) = self.prompt.ask("Type X to go back to the menu: ")? else {
                return Ok(Flow::Exit);
            };
            if answer.eq_ignore_ascii_case("x") {
                self.prompt.clear()?;
                return Ok(Flow::Continue);
            }
            self.prompt.say(INVALID_INPUT)?;
        }
    }

    fn clock_in_servers(&mut self, session: &mut RestaurantSession) -> io::Result<Flow> {
        self.prompt.clear()?;
        loop {
            let Some(name) = self
                .prompt
                .ask("Enter server name (or 'done' to finish): ")?
            else {
                return Ok(Flow::Exit);
            };
            if name.eq_ignore_ascii_case("done") {
                self.prompt.clear()?;
                return Ok(Flow::Continue);
            }

            match session.clock_in(&name) {
                Ok(server) => {
                    let line = format!("{} clocked in\n", server.name());
                    self.prompt.say(line)?;
                }
                Err(e) => self.prompt.say(e.to_string())?,
            }
        }
    }

    fn view_servers(&mut self, session: &RestaurantSession) -> io::Result<Flow> {
        self.prompt.clear()?;
        if session.roster().is_empty() {
            self.prompt.say("No servers are clocked in.")?;
        } else {
            self.prompt.say("Servers clocked in:")?;
            for server in session.roster().iter() {
                let line = if self.settings.show_server_load {
                    format!(" - {} ({} tables)", server.name(), server.tables_handled())
                } else {
                    format!(" - {}", server.name())
                };
                self.prompt.say(line)?;
            }
        }
        self.back_to_menu()
    }

    fn show_wait_time(&mut self, session: &RestaurantSession) -> io::Result<Flow> {
        let minutes = session.wait_minutes();
        info!("Wait estimate requested: {} minutes", minutes);
        self.prompt
            .say(format!("Current wait time: {} minutes", minutes))?;
        self.back_to_menu()
    }

    fn view_table_times(&mut self, session: &RestaurantSession) -> io::Result<Flow> {
        self.prompt.clear()?;
        loop {
            for row in session.table_times() {
                let line = match &row.server {
                    Some(server) => format!(
                        "{}: {:.2} minutes ({})",
                        row.label, row.elapsed_minutes, server
                    ),
                    None => format!("{}: -", row.label),
                };
                self.prompt.say(line)?;
            }

            let Some(answer) = self
                .prompt
                .ask("Press 'r' to update times, or 'x' to exit: ")?
            else {
                return Ok(Flow::Exit);
            };
            match answer.to_lowercase().as_str() {
                "r" => self.prompt.clear()?,
                "x" => return Ok(Flow::Continue),
                _ => self.prompt.say("Invalid input")?,
            }
        }
    }

    fn assign_table(&mut self, session: &mut RestaurantSession) -> io::Result<Flow> {
        self.prompt.clear()?;
        loop {
            let Some(party_size) = self
                .prompt
                .ask_integer("Enter party size (or 0 to exit): ")?
            else {
                return Ok(Flow::Exit);
            };
            if party_size == 0 {
                self.prompt.clear()?;
                return Ok(Flow::Continue);
            }
            let Ok(party_size) = u32::try_from(party_size) else {
                self.prompt.say(INVALID_INPUT)?;
                continue;
            };

            let group = match session.find_free_group(party_size) {
                Ok(group) => group,
                Err(e) => {
                    self.prompt.say(e.to_string())?;
                    continue;
                }
            };

            let Some(server) = self.prompt.ask("Enter server: ")? else {
                return Ok(Flow::Exit);
            };
            match session.commit(party_size, &group, &server) {
                Ok(assignment) => self.prompt.say(format!(
                    "Assigned tables {} to {}",
                    assignment.table_list(),
                    assignment.server
                ))?,
                Err(e) => self.prompt.say(e.to_string())?,
            }
        }
    }
}
