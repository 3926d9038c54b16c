//! Lexa CLI - Sponsor-licence compliance advisory from the terminal
//!
//! Stands in for the dashboard's chat panel: questions are sent, together
//! with the demo licence snapshot, to the configured generation backend.
//!
//! # Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! lexa ask "Which workers have the highest risk scores?"
//! lexa chat
//! lexa roster --status critical
//! LEXA_LLM_PROVIDER=ollama lexa status
//! ```

use std::time::Duration;

use anyhow::{anyhow, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::{ask, chat, context, roster, status};
use lexa_advisor::{
    parse_temperature, session_timeout_from_env, AdvisorConfig, AdvisorySession, AdvisoryService,
};
use lexa_llm::{LLMRouter, ProviderKind};
use lexa_types::ComplianceStatus;

/// Lexa CLI - UK sponsor-licence compliance intelligence
#[derive(Parser)]
#[command(name = "lexa")]
#[command(version)]
#[command(about = "Ask compliance questions about your sponsor licence", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    backend: BackendArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BackendArgs {
    /// Generation backend (gemini, ollama, offline); defaults to LEXA_LLM_PROVIDER
    #[arg(long, global = true)]
    provider: Option<String>,

    /// Model override for the selected backend
    #[arg(long, global = true)]
    model: Option<String>,

    /// Sampling temperature, 0.0-2.0
    #[arg(long, global = true)]
    temperature: Option<String>,

    /// Give up waiting after this many seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single compliance question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Show which backend answered and whether it fell back
        #[arg(short, long)]
        verbose: bool,
    },

    /// Start an interactive advisory chat
    Chat,

    /// Print the context snapshot sent with every question
    Context {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show workers ranked by risk, and the agent roster
    Roster {
        /// Only workers with this status (compliant, warning, critical, pending)
        #[arg(long)]
        status: Option<String>,

        /// Date to count visa expiry from (YYYY-MM-DD); defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Show the configured backend and whether it is reachable
    Status,
}

impl BackendArgs {
    fn service(&self) -> anyhow::Result<AdvisoryService> {
        let router = match &self.provider {
            Some(name) => {
                let kind = ProviderKind::from_str(name)
                    .ok_or_else(|| anyhow!("Unknown provider '{}'", name))?;
                LLMRouter::from_kind(kind)
            }
            None => LLMRouter::from_env(),
        };

        let mut config = AdvisorConfig::from_env();
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(raw) = &self.temperature {
            let Some(t) = parse_temperature(raw) else {
                bail!("Temperature must be a number between 0.0 and 2.0, got '{}'", raw);
            };
            config = config.with_temperature(t);
        }

        debug!(
            provider = %router.kind(),
            model = ?config.model,
            temperature = config.temperature,
            "Advisory backend configured"
        );
        Ok(AdvisoryService::with_config(router, config))
    }

    fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => session_timeout_from_env(),
        }
    }

    fn session(&self) -> anyhow::Result<AdvisorySession> {
        let session = AdvisorySession::new(self.service()?);
        Ok(match self.timeout() {
            Some(limit) => session.with_timeout(limit),
            None => session,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so answers on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { question, verbose } => {
            let session = cli.backend.session()?;
            ask::run(session, &question.join(" "), verbose).await?;
        }
        Commands::Chat => {
            chat::run(cli.backend.session()?).await?;
        }
        Commands::Context { pretty } => {
            context::run(pretty)?;
        }
        Commands::Roster { status, as_of } => {
            let status = status
                .map(|s| s.parse::<ComplianceStatus>())
                .transpose()?;
            let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
            roster::run(status, as_of)?;
        }
        Commands::Status => {
            let service = cli.backend.service()?;
            status::run(&service, cli.backend.timeout()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["lexa", "ask", "Run", "a", "mock", "audit", "--provider", "offline"]);
        match cli.command {
            Commands::Ask { question, verbose } => {
                assert_eq!(question.join(" "), "Run a mock audit");
                assert!(!verbose);
            }
            _ => panic!("expected ask"),
        }
        assert_eq!(cli.backend.provider.as_deref(), Some("offline"));
    }

    #[test]
    fn test_backend_overrides() {
        let cli = Cli::parse_from([
            "lexa",
            "status",
            "--provider",
            "offline",
            "--model",
            "gemini-test",
            "--temperature",
            "0.2",
            "--timeout",
            "15",
        ]);

        let service = cli.backend.service().unwrap();
        assert_eq!(service.llm().kind(), ProviderKind::Offline);
        assert_eq!(service.config().model.as_deref(), Some("gemini-test"));
        assert_eq!(service.config().temperature, 0.2);
        assert_eq!(cli.backend.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_rejects_bad_backend_args() {
        let cli = Cli::parse_from(["lexa", "status", "--provider", "hive"]);
        assert!(cli.backend.service().is_err());

        let cli = Cli::parse_from(["lexa", "status", "--provider", "offline", "--temperature", "9"]);
        assert!(cli.backend.service().is_err());
    }

    #[test]
    fn test_roster_args() {
        let cli = Cli::parse_from(["lexa", "roster", "--status", "critical", "--as-of", "2024-03-20"]);
        match cli.command {
            Commands::Roster { status, as_of } => {
                assert_eq!(status.as_deref(), Some("critical"));
                assert_eq!(as_of, NaiveDate::from_ymd_opt(2024, 3, 20));
            }
            _ => panic!("expected roster"),
        }
    }
}
