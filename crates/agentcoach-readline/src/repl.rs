//! Interactive loop over a single [`ChatSession`].

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;

use agentcoach_application::{ChatSession, TurnOutcome};
use agentcoach_core::persona::Persona;
use agentcoach_core::session::TurnRole;

use crate::commands::{HELP, ReplCommand};
use crate::helper::CliHelper;

pub async fn run(mut session: ChatSession) -> Result<()> {
    let personas = session
        .registry()
        .personas()
        .map(|persona| persona.id.clone())
        .collect();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(personas)));

    println!("{}", "=== Agent Coach AI ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/agents' to browse personas, '/help' for commands, or 'quit' to exit."
            .bright_black()
    );
    println!();
    print_selected(&session);

    loop {
        let prompt = format!("{}> ", session.selected_persona().id);
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        let command = ReplCommand::parse(&line);
        if command != ReplCommand::Empty {
            let _ = rl.add_history_entry(line.as_str());
        }

        match command {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::Help => println!("{}", HELP.bright_black()),
            ReplCommand::Sections => print_sections(&session),
            ReplCommand::Agents(section) => print_agents(&session, section.as_deref()),
            ReplCommand::Agent(name) => {
                if !session.registry().contains(&name) {
                    println!(
                        "{}",
                        format!("No persona named '{name}', using the general assistant.")
                            .yellow()
                    );
                }
                session.select_persona(&name);
                print_selected(&session);
            }
            ReplCommand::Upload(path) => upload(&mut session, &path).await,
            ReplCommand::Reset => {
                session.reset();
                println!(
                    "{}",
                    format!("Conversation with {} cleared.", session.selected_persona().id)
                        .bright_black()
                );
                if let Some(hint) = session.welcome_hint() {
                    print_reply(&session.selected_persona().id, hint);
                }
            }
            ReplCommand::History => print_history(&session),
            ReplCommand::Message(text) => {
                let outcome = session.submit(&text).await;
                print_outcome(&session, &outcome);
            }
            ReplCommand::MissingArgument(usage) => {
                println!("{}", format!("Usage: {usage}").yellow());
            }
            ReplCommand::Unknown(name) => {
                println!("{}", format!("Unknown command {name}. Try /help.").bright_black());
            }
        }
    }

    Ok(())
}

async fn upload(session: &mut ChatSession, path: &Path) {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!(
                "{}",
                format!("Could not read {}: {err}", path.display()).red()
            );
            return;
        }
    };
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!(
        "{}",
        format!("(System) Extracting {name}...").bright_black()
    );
    match session.upload_document(&name, &bytes).await {
        Ok(outcome) => {
            if let Some(warning) = &outcome.warning {
                println!("{}", format!("Warning: {warning}").yellow());
            }
            match &outcome.turn {
                Some(turn) => print_outcome(session, turn),
                None => println!(
                    "{}",
                    "Conversation already started. Use /reset and upload again to analyse this report."
                        .bright_black()
                ),
            }
        }
        Err(err) => eprintln!("{}", err.to_string().red()),
    }
}

fn print_outcome(session: &ChatSession, outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Responded { reply } => print_reply(&session.selected_persona().id, reply),
        TurnOutcome::Failed { error } => {
            eprintln!("{}", format!("Error: {error}").red());
        }
        TurnOutcome::Skipped => {}
    }
}

fn print_reply(author: &str, text: &str) {
    println!("{}", format!("[{author}]").bright_magenta());
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

fn print_selected(session: &ChatSession) {
    let persona = session.selected_persona();
    println!(
        "{}",
        format!("Now chatting with {} ({})", persona.id, persona.role).bright_green()
    );
    if let Some(hint) = session.welcome_hint() {
        print_reply(&persona.id, hint);
    }
}

fn print_sections(session: &ChatSession) {
    for section in session.registry().sections() {
        println!("{}", section.title.bright_yellow().bold());
        println!("  {}", section.persona_ids.join(", "));
    }
}

fn print_agents(session: &ChatSession, section: Option<&str>) {
    let registry = session.registry();
    let personas: Vec<&Persona> = match section {
        Some(title) => match registry.section(title) {
            Some(section) => {
                println!("{}", section.title.bright_yellow().bold());
                section
                    .persona_ids
                    .iter()
                    .filter_map(|id| registry.get(id))
                    .collect()
            }
            None => {
                println!("{}", format!("No section matching '{title}'.").yellow());
                return;
            }
        },
        None => registry.personas().collect(),
    };

    for persona in personas {
        let flags = persona.flags();
        let mut tags = Vec::new();
        if flags.needs_document_upload {
            tags.push("pdf");
        }
        if flags.needs_web_search {
            tags.push("web");
        }
        if flags.needs_knowledge_base {
            tags.push("kb");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        println!(
            "  {} - {}{}",
            persona.id.bright_cyan(),
            persona.role,
            tags.bright_black()
        );
    }
}

fn print_history(session: &ChatSession) {
    let history = session.history();
    if history.is_empty() {
        println!("{}", "No messages yet.".bright_black());
        return;
    }
    let persona = &session.selected_persona().id;
    for turn in history {
        match turn.role {
            TurnRole::User => println!("{}", format!("> {}", turn.content).green()),
            TurnRole::Assistant => print_reply(persona, &turn.content),
        }
    }
}
