use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use agentcoach_application::ChatSession;
use agentcoach_core::assembler::ContextAssembler;
use agentcoach_core::config::AppConfig;
use agentcoach_core::document::DocumentExtractor;
use agentcoach_core::persona::PersonaRegistry;
use agentcoach_core::search::{NullSearchProvider, SearchProvider};
use agentcoach_infrastructure::{
    ConfigService, DirectoryKnowledgeLoader, LopdfExtractor, load_api_key,
};
use agentcoach_interaction::{GeminiModelInvoker, GeminiWebSearch};

mod commands;
mod helper;
mod repl;

#[derive(Parser, Debug)]
#[command(name = "agentcoach")]
#[command(about = "Agent Coach AI - real-estate assistant personas in your terminal", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/agentcoach/config.toml)
    #[arg(long, env = "AGENTCOACH_CONFIG")]
    config: Option<PathBuf>,

    /// Model used for persona replies
    #[arg(long)]
    model: Option<String>,

    /// Persona selected at start-up
    #[arg(long)]
    persona: Option<String>,

    /// Disable web search for search-backed personas
    #[arg(long)]
    no_search: bool,
}

/// Layers command-line flags over the file configuration.
fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(persona) = &cli.persona {
        config.default_persona = Some(persona.clone());
    }
    if cli.no_search {
        config.search.enabled = false;
    }
    config
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let config = service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;
    Ok(apply_overrides(config, cli))
}

fn build_session(config: &AppConfig) -> Result<ChatSession> {
    let api_key = load_api_key(&config.api_key_env);
    let today = chrono::Local::now().date_naive();
    let registry = Arc::new(PersonaRegistry::with_presets(today)?);

    let extractor: Arc<dyn DocumentExtractor> = Arc::new(LopdfExtractor::new());
    let search: Arc<dyn SearchProvider> = match (&api_key, config.search.enabled) {
        (_, false) => Arc::new(NullSearchProvider::new("web search disabled")),
        (None, true) => Arc::new(NullSearchProvider::new(format!(
            "{} is not set",
            config.api_key_env
        ))),
        (Some(key), true) => Arc::new(GeminiWebSearch::new(key.clone(), &config.search.model)),
    };
    let knowledge = Arc::new(DirectoryKnowledgeLoader::new(
        config.knowledge_root.clone(),
        extractor.clone(),
    ));
    let invoker = Arc::new(GeminiModelInvoker::new(api_key, &config.model));

    tracing::info!(
        model = %config.model,
        search = config.search.enabled,
        knowledge_root = %config.knowledge_root.display(),
        "Session wired"
    );

    Ok(ChatSession::new(
        registry,
        ContextAssembler::new(search, knowledge),
        invoker,
        extractor,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut session = build_session(&config)?;
    if let Some(persona) = &config.default_persona {
        session.select_persona(persona);
    }

    repl::run(session).await
}
