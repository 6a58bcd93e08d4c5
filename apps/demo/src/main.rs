use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

mod app;
mod config;

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; defaults to ./demo.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    core_key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Add { text: String },
    Complete { index: usize },
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = config::load_settings(cli.config.as_deref())?;
    if let Some(core_key) = cli.core_key {
        settings.core_key = core_key;
    }
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let facade = app::bootstrap(&settings)?;
    match cli.command {
        Command::Add { text } => {
            facade.send_notification(app::notes::ADD_TODO, Some(json!(text)), None)
        }
        Command::Complete { index } => {
            facade.send_notification(app::notes::COMPLETE_TODO, Some(json!(index)), None)
        }
        Command::List => {}
    }

    for line in app::rendered_lines(&facade) {
        println!("{line}");
    }
    Ok(())
}
