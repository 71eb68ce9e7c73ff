//! REPL line parsing.

use std::path::PathBuf;

/// Slash commands offered for completion.
pub const COMMANDS: [&str; 7] = [
    "/sections",
    "/agents",
    "/agent",
    "/upload",
    "/reset",
    "/history",
    "/help",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Empty,
    Quit,
    Help,
    Sections,
    /// Lists every persona, or those of one section
    Agents(Option<String>),
    Agent(String),
    Upload(PathBuf),
    Reset,
    History,
    /// A user turn for the selected persona
    Message(String),
    /// A known command used without its argument; carries the usage line
    MissingArgument(&'static str),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplCommand::Empty;
        }
        if trimmed == "quit" || trimmed == "exit" {
            return ReplCommand::Quit;
        }
        if !trimmed.starts_with('/') {
            return ReplCommand::Message(trimmed.to_string());
        }

        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };

        match name {
            "/help" => ReplCommand::Help,
            "/sections" => ReplCommand::Sections,
            "/agents" => ReplCommand::Agents((!rest.is_empty()).then(|| rest.to_string())),
            "/agent" if rest.is_empty() => ReplCommand::MissingArgument("/agent <name>"),
            "/agent" => ReplCommand::Agent(rest.to_string()),
            "/upload" => {
                let path = rest.trim_matches(|c| c == '"' || c == '\'');
                if path.is_empty() {
                    ReplCommand::MissingArgument("/upload <path-to-pdf>")
                } else {
                    ReplCommand::Upload(PathBuf::from(path))
                }
            }
            "/reset" => ReplCommand::Reset,
            "/history" => ReplCommand::History,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

pub const HELP: &str = "\
/sections             list persona sections
/agents [section]     list personas, optionally for one section
/agent <name>         switch persona
/upload <path>        upload a PDF to the current persona
/reset                clear the current persona's conversation
/history              show the current persona's conversation
/help                 show this help
quit | exit           leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_message() {
        assert_eq!(
            ReplCommand::parse("  Write a listing for 3BR house  "),
            ReplCommand::Message("Write a listing for 3BR house".to_string())
        );
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_quit_words() {
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Quit);
        assert_eq!(
            ReplCommand::parse("exit strategy for sellers"),
            ReplCommand::Message("exit strategy for sellers".to_string())
        );
    }

    #[test]
    fn test_agent_takes_multi_word_name() {
        assert_eq!(
            ReplCommand::parse("/agent Contract Max"),
            ReplCommand::Agent("Contract Max".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/agent"),
            ReplCommand::MissingArgument("/agent <name>")
        );
    }

    #[test]
    fn test_agents_with_optional_section() {
        assert_eq!(ReplCommand::parse("/agents"), ReplCommand::Agents(None));
        assert_eq!(
            ReplCommand::parse("/agents buyers"),
            ReplCommand::Agents(Some("buyers".to_string()))
        );
    }

    #[test]
    fn test_upload_strips_quotes() {
        assert_eq!(
            ReplCommand::parse("/upload \"reports/123 Main St.pdf\""),
            ReplCommand::Upload(PathBuf::from("reports/123 Main St.pdf"))
        );
        assert!(matches!(
            ReplCommand::parse("/upload"),
            ReplCommand::MissingArgument(_)
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/plan now"),
            ReplCommand::Unknown("/plan".to_string())
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for command in COMMANDS {
            assert!(!matches!(
                ReplCommand::parse(command),
                ReplCommand::Unknown(_) | ReplCommand::Message(_)
            ));
        }
    }
}
