//! Line-oriented event loop for `tabsort interactive`.
//!
//! Each input line is one event. After every event that changes what is
//! shown, the current table is derived again and redrawn.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tabsort_render::TextTable;
use thiserror::Error;

use crate::loader::LoadError;
use crate::page::Page;

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
commands:
  sort <key>      click the header of column <key>
  search <text>   filter rows; `search` alone clears the filter
  reload          load the data again
  table <name>    switch to another table
  tables          list the tables
  help            show this message
  quit            leave";

/// One user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Sort(String),
    Search(String),
    Reload,
    Table(String),
    Tables,
    Help,
    Quit,
}

/// Error handling one input line. None of these end the loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command \"{0}\" (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("no column \"{0}\" in this table")]
    UnknownColumn(String),

    #[error("no table \"{0}\"")]
    UnknownTable(String),

    #[error("reload failed: {0}")]
    Load(#[from] LoadError),
}

impl FromStr for Event {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Only the separator after the command word is dropped; search
        // text keeps its own leading and trailing spaces.
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line, ""),
        };

        let argument = |name: &'static str| {
            let value = rest.trim();
            if value.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(value.to_string())
            }
        };

        match command {
            "sort" => argument("sort").map(Event::Sort),
            "search" => Ok(Event::Search(rest.to_string())),
            "reload" => Ok(Event::Reload),
            "table" => argument("table").map(Event::Table),
            "tables" => Ok(Event::Tables),
            "help" | "?" => Ok(Event::Help),
            "quit" | "exit" | "q" => Ok(Event::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// What the loop does after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Redraw,
    Print(String),
    Quit,
}

/// An interactive session over one page.
pub struct Session<'a> {
    page: &'a mut Page,
    current: String,
    renderer: TextTable,
}

impl<'a> Session<'a> {
    /// Starts a session showing `table`.
    pub fn new(page: &'a mut Page, table: &str, renderer: TextTable) -> Result<Self, CommandError> {
        if page.table(table).is_none() {
            return Err(CommandError::UnknownTable(table.to_string()));
        }
        Ok(Session {
            page,
            current: table.to_string(),
            renderer,
        })
    }

    /// Renders the current table.
    pub fn render(&self) -> String {
        match self.page.table(&self.current) {
            Some(table) => self.renderer.render(&self.page.view(table)),
            None => String::new(),
        }
    }

    fn apply(&mut self, event: Event) -> Result<Outcome, CommandError> {
        log::debug!("event {:?} on {}", event, self.current);
        match event {
            Event::Sort(key) => {
                let table = self
                    .page
                    .table_mut(&self.current)
                    .ok_or_else(|| CommandError::UnknownTable(self.current.clone()))?;
                if !table.config.columns.iter().any(|c| c.key == key) {
                    return Err(CommandError::UnknownColumn(key));
                }
                table.click(&key);
                Ok(Outcome::Redraw)
            }
            Event::Search(text) => {
                let table = self
                    .page
                    .table_mut(&self.current)
                    .ok_or_else(|| CommandError::UnknownTable(self.current.clone()))?;
                table.search(text);
                Ok(Outcome::Redraw)
            }
            Event::Reload => {
                self.page.reload()?;
                Ok(Outcome::Redraw)
            }
            Event::Table(name) => {
                if self.page.table(&name).is_none() {
                    return Err(CommandError::UnknownTable(name));
                }
                self.current = name;
                Ok(Outcome::Redraw)
            }
            Event::Tables => Ok(Outcome::Print(self.page.names().join("\n"))),
            Event::Help => Ok(Outcome::Print(HELP.to_string())),
            Event::Quit => Ok(Outcome::Quit),
        }
    }

    /// Runs the loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.render())?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Event>().and_then(|event| self.apply(event)) {
                Ok(Outcome::Redraw) => writeln!(out, "{}", self.render())?,
                Ok(Outcome::Print(text)) => writeln!(out, "{}", text)?,
                Ok(Outcome::Quit) => break,
                Err(err) => writeln!(out, "error: {}", err)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events() {
        assert_eq!("sort age".parse::<Event>().unwrap(), Event::Sort("age".into()));
        assert_eq!(
            "search ada lovelace".parse::<Event>().unwrap(),
            Event::Search("ada lovelace".into())
        );
        assert_eq!("search".parse::<Event>().unwrap(), Event::Search(String::new()));
        assert_eq!("reload".parse::<Event>().unwrap(), Event::Reload);
        assert_eq!(
            "table courses".parse::<Event>().unwrap(),
            Event::Table("courses".into())
        );
        assert_eq!("tables".parse::<Event>().unwrap(), Event::Tables);
        assert_eq!("?".parse::<Event>().unwrap(), Event::Help);
        assert_eq!("exit".parse::<Event>().unwrap(), Event::Quit);
    }

    #[test]
    fn search_text_keeps_its_spaces() {
        assert_eq!(
            "search  x ".parse::<Event>().unwrap(),
            Event::Search(" x ".into())
        );
        assert_eq!("search \r".parse::<Event>().unwrap(), Event::Search(String::new()));
        assert_eq!("sort  age ".parse::<Event>().unwrap(), Event::Sort("age".into()));
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(matches!(
            "sort".parse::<Event>(),
            Err(CommandError::MissingArgument("sort"))
        ));
        assert!(matches!(
            "dance".parse::<Event>(),
            Err(CommandError::UnknownCommand(c)) if c == "dance"
        ));
    }
}
