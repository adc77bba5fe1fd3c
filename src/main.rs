use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use heartdeck::config::Config;
use heartdeck::logging::init_tracing;
use heartdeck::shutdown::{ShutdownCoordinator, ShutdownPhase};
use heartdeck::ui::runtime;

/// A Valentine's slideshow for the terminal
#[derive(Parser, Debug)]
#[command(name = "heartdeck", version, about)]
struct Cli {
    /// Configuration file (default: <config dir>/heartdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs here instead of the configured file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    if cli.print_config {
        let rendered = toml::to_string_pretty(&config).context("failed to render config")?;
        print!("{rendered}");
        return Ok(());
    }

    let log_path = init_tracing(&config.logging).context("failed to initialise logging")?;
    let session_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("session", id = %session_id);
    span.in_scope(|| tracing::info!(log = %log_path.display(), "heartdeck starting"));

    let coordinator = ShutdownCoordinator::new();
    let handle = coordinator.handle();

    let signal_handle = coordinator.handle();
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::warn!(error = %err, "Ctrl-C listener failed");
                }
                tracing::info!("Interrupt received");
                signal_handle.signal();
            }
            _ = signal_handle.wait() => {}
        }
    });

    let result = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        runtime::run(&config, handle)
    })
    .await
    .context("UI task panicked")?;

    coordinator.signal();
    coordinator.advance(ShutdownPhase::RestoringTerminal);
    result.context("deck UI failed")?;
    coordinator.advance(ShutdownPhase::Complete);
    tracing::info!("heartdeck stopped");
    Ok(())
}
