// fanassist entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Load config (seeding config/ from defaults/)
// 3. Initialize tracing (log to file, keep stdout for the report)
// 4. Run the requested command and print its output

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fanassist_cli::app::{self, PayoutRequest};
use fanassist_cli::config::{self, Config};
use fanassist_cli::report;
use fanassist_core::PlayMode;
use tracing::info;

#[derive(Parser)]
#[command(name = "fanassist")]
#[command(about = "Settle Power and Flex prop lineups")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a lineup, optionally grading it from final stat lines first
    Payout {
        /// Lineup JSON file
        #[arg(short, long)]
        lineup: PathBuf,

        /// Play mode (power or flex); overrides the lineup file
        #[arg(short, long)]
        mode: Option<PlayMode>,

        /// Wager amount; overrides the lineup file and the configured default
        #[arg(short, long)]
        wager: Option<f64>,

        /// Game results CSV used to grade the picks
        #[arg(short, long)]
        results: Option<PathBuf>,

        /// Print the payout record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the payout and modifier tables
    Tables,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load_config().context("failed to load configuration")?;
    init_tracing(&config)?;
    info!("fanassist starting up");

    let output = match cli.command {
        Commands::Payout {
            lineup,
            mode,
            wager,
            results,
            json,
        } => {
            let request = PayoutRequest {
                lineup,
                mode,
                wager,
                results,
                json,
            };
            app::run_payout(&config, &request)?
        }
        Commands::Tables => report::render_tables(),
    };

    println!("{output}");
    Ok(())
}

/// Initialize tracing to a log file under the configured directory.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(&config.logging.directory);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("fanassist.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
