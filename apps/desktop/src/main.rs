use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::HttpMovieGateway;
use shared::domain::MovieRecordInput;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use desktop::{
    config::{load_settings, Overrides},
    controller::{
        orchestration::{run_fetch, run_shell, submit_and_report},
        MovieController,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Fetch, list and add movies")]
struct Cli {
    /// Movie collection URL (GET lists, POST creates).
    #[arg(long, global = true)]
    endpoint_url: Option<String>,
    /// TOML settings file; defaults to ./movies.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the movie list.
    Fetch {
        /// Print records as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Add a movie.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        opening_text: String,
        #[arg(long)]
        release_date: String,
        /// Fetch and print the list afterwards.
        #[arg(long)]
        refresh: bool,
    },
    /// Interactive session (default).
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&Overrides {
        config_path: cli.config.clone(),
        endpoint_url: cli.endpoint_url.clone(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(endpoint = %settings.endpoint_url, "using movie endpoint");

    let gateway = HttpMovieGateway::new(settings.endpoint_url);
    let controller = MovieController::new(Arc::new(gateway));
    let mut out = std::io::stdout();

    let outcome = match cli.command.unwrap_or(Command::Shell) {
        Command::Fetch { json } => run_fetch(&controller, json, &mut out).await,
        Command::Add {
            title,
            opening_text,
            release_date,
            refresh,
        } => {
            let input = MovieRecordInput {
                title,
                opening_text,
                release_date,
            };
            if !submit_and_report(&controller, input, &mut out).await? {
                bail!("movie was not added");
            }
            if refresh {
                run_fetch(&controller, false, &mut out).await?;
            }
            Ok(())
        }
        Command::Shell => {
            run_shell(&controller, BufReader::new(tokio::io::stdin()), &mut out).await
        }
    };
    controller.dispose();
    outcome
}
