use anyhow::{bail, Result};
use callout_core::config::SessionConfig;
use callout_core::session::{ExportFormat, SessionManager};
use callout_infrastructure::{ConfigService, FileExporter, JsonSessionRepository};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "callout")]
#[command(about = "Callout - voice chat translation session tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a saved session transcript and its statistics
    Show {
        /// Path to a saved session file
        file: PathBuf,
    },
    /// Export a saved session to another format
    Export {
        /// Path to a saved session file
        file: PathBuf,
        /// Output format: text, html, json, pdf, or csv
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Output path; defaults to the configured export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Builds a manager over the saved file without background autosave.
async fn load_manager(config: SessionConfig, file: &PathBuf) -> Result<SessionManager> {
    let config = SessionConfig {
        auto_save: false,
        ..config
    };
    let manager = SessionManager::new(
        config,
        Arc::new(JsonSessionRepository::new()),
        Arc::new(FileExporter::new()),
    );
    if !manager.load_session(file).await {
        bail!("failed to load session from {}", file.display());
    }
    Ok(manager)
}

async fn show(config: SessionConfig, file: PathBuf) -> Result<()> {
    let manager = load_manager(config, &file).await?;

    for message in manager.messages().await {
        let speaker = if message.is_outgoing() { "You" } else { "Teammate" };
        println!(
            "[{}] {} ({}): {}",
            message.timestamp.format("%H:%M:%S"),
            speaker,
            message.language,
            message.text
        );
        if let Some(translation) = message.translation {
            println!("    → {}", translation);
        }
    }

    let stats = manager.get_stats().await;
    println!();
    println!("Session:  {}", stats.session_id);
    println!("Duration: {}", stats.duration_formatted);
    println!(
        "Messages: {} ({} sent, {} received)",
        stats.total_messages, stats.outgoing_messages, stats.incoming_messages
    );
    println!("Words:    {}", stats.word_count);
    Ok(())
}

async fn export(
    config: SessionConfig,
    file: PathBuf,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let manager = load_manager(config, &file).await?;
    let format = ExportFormat::from_name(&format);

    if !manager.export_session(format, output.as_deref()).await {
        bail!("export failed");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = ConfigService::new().get_config();

    match cli.command {
        Commands::Show { file } => show(config.session, file).await?,
        Commands::Export {
            file,
            format,
            output,
        } => export(config.session, file, format, output).await?,
    }

    Ok(())
}
