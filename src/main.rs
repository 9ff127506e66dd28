use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resume_analyzer::config::AppConfig;
use resume_analyzer::jobs::JobPostingGateway;
use resume_analyzer::nlp::{LanguageModel, RuleLanguageModel};
use resume_analyzer::pipeline::AnalysisOrchestrator;
use resume_analyzer::{documents, start_web_server};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser)]
#[command(name = "resumatch")]
#[command(about = "Resume analysis and job-matching API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Analyze a resume file locally and print the result as JSON
    Analyze {
        file: PathBuf,
        #[arg(long)]
        location: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("resume_analyzer=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Serve { port } => start_web_server(config, port).await,
        Command::Analyze { file, location } => analyze_file(config, &file, location).await,
    }
}

async fn analyze_file(config: AppConfig, file: &PathBuf, location: Option<String>) -> Result<()> {
    let raw = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let text = documents::decode_text(&raw)?;

    let model: Arc<dyn LanguageModel> =
        Arc::new(RuleLanguageModel::new().context("Failed to build language model")?);
    let provider = config.build_provider()?;
    let gateway = JobPostingGateway::new(provider, config.fallback_location.clone());
    let orchestrator = AnalysisOrchestrator::new(model, gateway, config.default_location.clone());

    let outcome = orchestrator.analyze(&text, location.as_deref()).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
