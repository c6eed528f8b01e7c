use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

mod output;
mod resolve;
mod tiers;

#[derive(Debug, Parser)]
#[command(name = "placelens")]
#[command(about = "Resolve storefront photos to place records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve one or more photos to place records
    Resolve(resolve::ResolveArgs),
    /// Print the active search cascade
    Tiers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Resolve(args) => {
            let config = placelens_core::load_app_config_from_env()?;
            init_logging(&config.log_level);
            resolve::run_resolve(&config, args, interrupt_token()).await
        }
        Commands::Tiers => {
            init_logging("info");
            tiers::run_tiers()
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Cancellation token wired to Ctrl-C. In-flight resolutions observe it
/// at their next suspension point and report themselves cancelled.
fn interrupt_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling in-flight resolutions");
            token.cancel();
        }
    });
    cancel
}
