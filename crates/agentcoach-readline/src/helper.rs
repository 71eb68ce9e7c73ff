use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMANDS;

/// Completion, highlighting and hints for slash commands and persona names.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    personas: Vec<String>,
}

impl CliHelper {
    pub fn new(personas: Vec<String>) -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
            personas,
        }
    }

    fn persona_candidates(&self, prefix: &str) -> Vec<Pair> {
        let wanted = prefix.to_lowercase();
        self.personas
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&wanted))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }

    /// Completion suffix for a partially typed command or `/agent` name.
    fn suffix_hint(&self, line: &str) -> Option<String> {
        if let Some(typed) = line.strip_prefix("/agent ") {
            if typed.trim().is_empty() {
                return None;
            }
            let wanted = typed.to_lowercase();
            return self
                .personas
                .iter()
                .find(|name| name.len() > typed.len() && name.to_lowercase().starts_with(&wanted))
                .and_then(|name| name.get(typed.len()..))
                .map(str::to_string);
        }

        if line.starts_with('/') && !line.contains(' ') {
            return self
                .commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string());
        }
        None
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(name) = line.strip_prefix("/agent ") {
            return Ok(("/agent ".len(), self.persona_candidates(name)));
        }

        if line.starts_with('/') && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        self.suffix_hint(&line[..pos])
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CliHelper {
        CliHelper::new(vec![
            "Bob".to_string(),
            "Contract Max".to_string(),
            "Lexy".to_string(),
        ])
    }

    #[test]
    fn test_hint_completes_command() {
        assert_eq!(helper().suffix_hint("/up"), Some("load".to_string()));
        assert_eq!(helper().suffix_hint("/upload"), None);
    }

    #[test]
    fn test_hint_completes_persona_name_case_insensitively() {
        let helper = helper();
        assert_eq!(helper.suffix_hint("/agent con"), Some("tract Max".to_string()));
        assert_eq!(helper.suffix_hint("/agent Le"), Some("xy".to_string()));
        assert_eq!(helper.suffix_hint("/agent Lexy"), None);
        assert_eq!(helper.suffix_hint("/agent "), None);
        assert_eq!(helper.suffix_hint("/agent Zed"), None);
    }

    #[test]
    fn test_plain_text_has_no_hint() {
        assert_eq!(helper().suffix_hint("price my condo"), None);
    }

    #[test]
    fn test_persona_candidates_match_prefix() {
        let names: Vec<String> = helper()
            .persona_candidates("b")
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(names, vec!["Bob"]);
    }
}
