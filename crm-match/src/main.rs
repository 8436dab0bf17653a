use anyhow::Context;
use clap::{Parser, Subcommand};
use crm_match::{commands, MatchConfig};
use shared_types::ListImportCandidatesRequest;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Matching config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest matches for import candidates and print one ranked page
    Rank {
        #[arg(long)]
        candidates: PathBuf,
        #[arg(long)]
        contacts: PathBuf,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        page: Option<usize>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Match a calendar attendee against existing contacts
    Attendee {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        contacts: PathBuf,
    },
}

fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Output goes to stdout, so logs go to stderr
    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("crm-match.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();

        None
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file_path.as_deref());

    let (config, config_path) =
        MatchConfig::load(args.config).context("Failed to load matching config")?;
    config
        .validate()
        .with_context(|| format!("Invalid matching config at {}", config_path.display()))?;
    tracing::info!("Loaded matching config from {}", config_path.display());

    let output = match args.command {
        Command::Rank {
            candidates,
            contacts,
            source,
            page,
            limit,
        } => {
            let request = ListImportCandidatesRequest {
                source,
                page,
                limit,
            };
            let response = commands::rank(&config, &candidates, &contacts, &request)?;
            tracing::info!(
                "Returning page {} of {} ({} candidates total)",
                response.page,
                response.pages,
                response.total
            );
            serde_json::to_string_pretty(&response)?
        }
        Command::Attendee {
            name,
            email,
            contacts,
        } => {
            let suggested = commands::attendee(&config, &name, &email, &contacts)?;
            if suggested.is_none() {
                tracing::info!("No contact matched attendee {}", name);
            }
            serde_json::to_string_pretty(&suggested)?
        }
    };

    println!("{}", output);

    Ok(())
}
