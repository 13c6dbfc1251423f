// src/console/mod.rs
//! Interactive line-oriented session.
//!
//! Each input line is one command. Commands map onto the named [`AppState`]
//! operations, and the affected part of the dashboard is rendered after
//! every change.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::app::{AppState, SubmitOutcome, Tab};
use crate::entity::DraftField;
use crate::error::{RailboardError, Result};
use crate::render::Renderer;
use crate::search::StatusFilter;

const HELP: &str = "\
Commands:
  show                      Render the whole dashboard
  list                      List trains matching the search and filter
  stats                     Show the summary counters
  search [text...]          Set the search text (no text clears it)
  filter <all|delayed|ontime>
  tab <schedule|live|manage>
  add                       Open the add-train form
  set <field> [value...]    Edit a form field
  submit                    Add the drafted train
  cancel                    Close the form
  help                      Show this help
  quit                      Leave the console
";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    List,
    Stats,
    Search(String),
    Filter(StatusFilter),
    Tab(Tab),
    Add,
    Set(DraftField, String),
    Submit,
    Cancel,
    Help,
    Quit,
}

/// Split off the first word and the single whitespace character after it.
/// Whatever follows is returned untouched.
fn split_word(s: &str) -> (&str, &str) {
    match s.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, sep)) => (&s[..i], &s[i + sep.len_utf8()..]),
        None => (s, ""),
    }
}

/// Parse one input line. Blank lines parse to `None`.
///
/// Only the line ending is stripped, so search text and form values keep
/// their own leading and trailing spaces.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_word(line.trim_start());

    let command = match word.to_lowercase().as_str() {
        "show" => Command::Show,
        "list" | "ls" => Command::List,
        "stats" => Command::Stats,
        "search" => Command::Search(rest.to_string()),
        "filter" => Command::Filter(
            rest.trim()
                .parse()
                .map_err(RailboardError::InvalidFilter)?,
        ),
        "tab" => Command::Tab(rest.trim().parse().map_err(RailboardError::InvalidTab)?),
        "add" => Command::Add,
        "set" => {
            let (field, value) = split_word(rest.trim_start());
            let field = field.parse().map_err(RailboardError::UnknownField)?;
            Command::Set(field, value.to_string())
        }
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(RailboardError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

pub struct Console<R, W> {
    state: AppState,
    renderer: Renderer,
    prompt: Option<String>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(state: AppState, renderer: Renderer, input: R, output: W) -> Self {
        Self {
            state,
            renderer,
            prompt: None,
            input,
            output,
        }
    }

    /// Print `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let dashboard = self.renderer.render_dashboard(&self.state);
        write!(self.output, "{}", dashboard)?;
        writeln!(self.output, "Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        debug!(trains = self.state.registry().len(), "Console session ended");
        Ok(())
    }

    /// Apply one command and write its output.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!(?command, "Executing console command");
        let out = match command {
            Command::Show => self.renderer.render_dashboard(&self.state),
            Command::List => self.render_list(),
            Command::Stats => self.renderer.render_stats(&self.state.aggregates()),
            Command::Search(text) => {
                self.state.set_search(text);
                self.render_list()
            }
            Command::Filter(filter) => {
                self.state.set_filter(filter);
                self.render_list()
            }
            Command::Tab(tab) => {
                self.state.select_tab(tab);
                self.renderer.render_tabs(tab)
            }
            Command::Add => {
                self.state.open_add_form();
                self.renderer.render_form(&self.state.form().draft)
            }
            Command::Set(field, value) => {
                if !self.state.is_form_open() {
                    "No form open. Use 'add' first.\n".to_string()
                } else {
                    match self.state.edit_draft(field, &value) {
                        Ok(()) => self.renderer.render_form(&self.state.form().draft),
                        Err(e) => format!("Error: {}\n", e),
                    }
                }
            }
            Command::Submit => match self.state.submit_add_form() {
                SubmitOutcome::Added(train) => {
                    format!(
                        "Added train {} ({}) - {}\n\n{}",
                        train.number,
                        train.id,
                        train.name,
                        self.renderer.render_dashboard(&self.state)
                    )
                }
                SubmitOutcome::Ignored { .. } => {
                    self.renderer.render_form(&self.state.form().draft)
                }
                SubmitOutcome::FormClosed => "No form open. Use 'add' first.\n".to_string(),
            },
            Command::Cancel => {
                self.state.cancel_add_form();
                self.renderer.render_dashboard(&self.state)
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };

        write!(self.output, "{}", out)?;
        Ok(())
    }

    fn render_list(&self) -> String {
        format!(
            "{}\n{}",
            self.renderer
                .render_toolbar(self.state.search_text(), self.state.status_filter()),
            self.renderer.render_train_list(&self.state.visible_trains())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (AppState, String) {
        let mut output = Vec::new();
        let state = {
            let mut console = Console::new(
                AppState::new(),
                Renderer::default(),
                Cursor::new(script.as_bytes()),
                &mut output,
            );
            console.run().unwrap();
            console.state().clone()
        };
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("show").unwrap(), Some(Command::Show));
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(
            parse_command("search New York").unwrap(),
            Some(Command::Search("New York".to_string()))
        );
        assert_eq!(
            parse_command("search").unwrap(),
            Some(Command::Search(String::new()))
        );
        assert_eq!(
            parse_command("FILTER delayed").unwrap(),
            Some(Command::Filter(StatusFilter::Delayed))
        );
        assert_eq!(
            parse_command("tab manage").unwrap(),
            Some(Command::Tab(Tab::Manage))
        );
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            parse_command("set name Coast Starlight").unwrap(),
            Some(Command::Set(DraftField::Name, "Coast Starlight".to_string()))
        );
        assert_eq!(
            parse_command("set platform").unwrap(),
            Some(Command::Set(DraftField::Platform, String::new()))
        );
    }

    #[test]
    fn test_parse_keeps_surrounding_spaces() {
        assert_eq!(
            parse_command("search express \n").unwrap(),
            Some(Command::Search("express ".to_string()))
        );
        assert_eq!(
            parse_command("set number    \r\n").unwrap(),
            Some(Command::Set(DraftField::Number, "   ".to_string()))
        );
        assert_eq!(
            parse_command("  filter  delayed \n").unwrap(),
            Some(Command::Filter(StatusFilter::Delayed))
        );
        assert_eq!(parse_command(" \r\n").unwrap(), None);
    }

    #[test]
    fn test_search_trailing_space_narrows_results() {
        let (state, _) = run_script("search express \n");
        assert_eq!(state.search_text(), "express ");
        let numbers: Vec<&str> = state
            .visible_trains()
            .iter()
            .map(|t| t.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["EXP-101"]);
    }

    #[test]
    fn test_whitespace_number_is_accepted() {
        let script = "add\nset number    \nset name Blank Plate\nset from A\nset to B\nsubmit\n";
        let (state, out) = run_script(script);
        assert_eq!(state.registry().len(), 6);
        assert_eq!(state.registry().trains()[5].number, "   ");
        assert!(out.contains("Added train"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_command("filter boarding"),
            Err(RailboardError::InvalidFilter(_))
        ));
        assert!(matches!(
            parse_command("tab settings"),
            Err(RailboardError::InvalidTab(_))
        ));
        assert!(matches!(
            parse_command("set colour red"),
            Err(RailboardError::UnknownField(_))
        ));
        assert!(matches!(
            parse_command("launch"),
            Err(RailboardError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_search_with_no_results_shows_empty_state() {
        let (_, out) = run_script("search ZZZZZ\n");
        assert!(out.contains("No trains found"));
    }

    #[test]
    fn test_add_flow_appends_train() {
        let script = "add\nset number NEW-1\nset name Night Owl\nset from Denver\nset to Omaha\nsubmit\nstats\n";
        let (state, out) = run_script(script);
        assert_eq!(state.registry().len(), 6);
        assert!(!state.is_form_open());
        assert!(out.contains("Added train NEW-1"));
        assert!(out.contains("Total Trains: 6"));
        assert!(out.contains("Total Capacity: 2400"));
    }

    #[test]
    fn test_incomplete_submit_is_silent() {
        let (state, out) = run_script("add\nset number NEW-1\nsubmit\n");
        assert_eq!(state.registry().len(), 5);
        assert!(state.is_form_open());
        assert!(!out.contains("Added train"));
        assert!(!out.contains("Error"));
    }

    #[test]
    fn test_set_without_form() {
        let (state, out) = run_script("set name Nobody\n");
        assert!(out.contains("No form open"));
        assert_eq!(state.form().draft.name, None);
    }

    #[test]
    fn test_bad_command_does_not_end_session() {
        let (state, out) = run_script("launch\nfilter delayed\n");
        assert!(out.contains("Error: Unknown command: launch"));
        assert_eq!(state.status_filter(), StatusFilter::Delayed);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (state, _) = run_script("quit\nfilter delayed\n");
        assert_eq!(state.status_filter(), StatusFilter::All);
    }

    #[test]
    fn test_prompt_is_written() {
        let mut output = Vec::new();
        Console::new(
            AppState::new(),
            Renderer::default(),
            Cursor::new(&b"quit\n"[..]),
            &mut output,
        )
        .with_prompt("> ")
        .run()
        .unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.ends_with("> "));
    }
}
