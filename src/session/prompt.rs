//! Line-oriented terminal prompts
//!
//! Reads from any `BufRead` and writes to any `Write`, so the console can run
//! against stdin/stdout or against scripted input in tests. End of input is
//! reported as `None` rather than an error.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Message printed whenever a numeric prompt gets something else
pub const INVALID_INPUT: &str = "Invalid input.";

pub struct Prompt<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Print a line
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Wipe the terminal if screen clearing is enabled
    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Show `prompt` and read one line without its line ending
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }

    /// Ask until the answer parses as an integer
    pub fn ask_integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(INVALID_INPUT)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(p: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut p = prompt("Amy\r\nBo\n");
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("Amy"));
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("Bo"));
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_integer_reprompts() {
        let mut p = prompt("ten\n\n 12 \n");
        assert_eq!(p.ask_integer("size: ").unwrap(), Some(12));

        let out = output(p);
        assert_eq!(out.matches("size: ").count(), 3);
        assert_eq!(out.matches(INVALID_INPUT).count(), 2);
    }

    #[test]
    fn test_ask_integer_eof() {
        let mut p = prompt("abc\n");
        assert_eq!(p.ask_integer("size: ").unwrap(), None);
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut p = prompt("");
        p.clear().unwrap();
        assert!(output(p).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_clear_wipes_and_homes_cursor() {
        let mut p = Prompt::new(Cursor::new(Vec::new()), Vec::new(), true);
        p.clear().unwrap();

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("\x1B[2J"));
        assert!(out.ends_with("\x1B[1;1H"));
    }
}
