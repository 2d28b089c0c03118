use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use newsapp_lib::bootstrap::{
    load_config_or_empty, resolve_app_paths, tracing::init_tracing_subscriber, wire_dependencies,
    AppRuntime,
};
use newsapp_lib::commands;

#[derive(Parser)]
#[command(name = "newsapp")]
#[command(about = "News reader backend: onboarding and saved articles", long_about = None)]
struct Cli {
    /// Config file (falls back to NEWSAPP_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the start destination and storage summary
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark onboarding as completed
    CompleteOnboarding,
    /// Save the article if absent, remove it if present
    ToggleSave {
        #[arg(long)]
        url: String,
        #[arg(long)]
        title: String,
    },
    /// List saved articles, newest first
    Saved,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_empty(cli.config)?;
    let paths = resolve_app_paths(&config)?;
    init_tracing_subscriber(&paths.logs_dir)?;

    let deps = wire_dependencies(&config, &paths)?;
    let runtime = AppRuntime::new(deps, paths);

    match cli.command {
        Commands::Status { json } => {
            let report = commands::status(&runtime).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::CompleteOnboarding => {
            commands::complete_onboarding(&runtime).await?;
            println!("onboarding completed");
        }
        Commands::ToggleSave { url, title } => {
            let effect = commands::toggle_save(&runtime, url, title).await?;
            println!("{}", effect.message());
        }
        Commands::Saved => {
            for article in commands::saved(&runtime).await? {
                println!("{}", serde_json::to_string(&article)?);
            }
        }
    }

    Ok(())
}
