mod config;
mod pages;
mod server;
#[cfg(test)]
mod test_util;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use nextstep_core::model::GeminiClient;

use config::ServerConfig;
use server::AppState;

#[derive(Parser)]
#[command(name = "nextstep", about = "AI career roadmap backend for NextStep")]
struct Cli {
    /// Gemini API key (overrides GEMINI_API_KEY env var)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a nextstep config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

/// Execute the `nextstep init` command: write a starter config file.
fn cmd_init(api_key: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        gemini: config::GeminiSection {
            api_key: api_key.unwrap_or_default().to_string(),
            model: None,
        },
        firebase: config::FirebaseSection::default(),
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!();
    println!("Next: fill in [gemini] api_key (or set GEMINI_API_KEY), then run `nextstep serve`.");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(cli.api_key.as_deref(), force)?;
        }
        Commands::Serve { bind, port } => {
            let resolved = ServerConfig::resolve(cli.api_key.as_deref())?;

            let mut model = GeminiClient::new(resolved.api_key)
                .context("failed to construct Gemini client")?;
            if let Some(name) = resolved.model {
                model = model.with_model(name);
            }

            let state = AppState {
                model: Arc::new(model),
                firebase: resolved.firebase,
            };
            server::run_serve(state, &bind, port).await?;
        }
    }

    Ok(())
}
