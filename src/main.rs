//! Data Counter - command-line host
//!
//! Runs a single counter, printing its events to stdout as JSON lines.
//! Lines on stdin act as host signals: `play`, `stop`, or a JSON counter
//! configuration to apply.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use data_counter::{
    config::Config,
    state::{Counter, CounterConfig},
    utils::shutdown_signal,
    StdoutHost,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only events
    tracing_subscriber::fmt()
        .with_env_filter(format!("data_counter={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting data-counter v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: type={}, date={:?}, time={:?}, refresh={}",
        config.direction, config.date, config.time, config.refresh
    );

    let counter = Counter::new(Arc::new(StdoutHost), config.counter_config());
    counter.on_start().map_err(anyhow::Error::msg)?;

    info!("Commands on stdin:");
    info!("  play        - Restart the counter");
    info!("  stop        - Stop refreshing");
    info!("  {{...json}}   - Apply a new configuration");

    tokio::select! {
        result = read_commands(&counter) => {
            if let Err(e) = result {
                tracing::error!("Failed to read commands: {}", e);
            }
        }
        signal = shutdown_signal() => {
            if let Err(e) = signal {
                tracing::error!("Signal handler error: {}", e);
            }
        }
    }

    counter.on_stop().map_err(anyhow::Error::msg)?;
    info!("Counter shutdown complete");
    Ok(())
}

/// Apply host commands from stdin until it closes
async fn read_commands(counter: &Counter) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        let outcome = match command {
            "" => continue,
            "play" => counter.on_play(),
            "stop" => counter.on_stop(),
            json => match serde_json::from_str::<CounterConfig>(json) {
                Ok(new_config) => counter.reconfigure(new_config),
                Err(e) => {
                    warn!("Ignoring unrecognized command {:?}: {}", json, e);
                    continue;
                }
            },
        };

        if let Err(e) = outcome {
            tracing::error!("Command {:?} failed: {}", command, e);
        }
    }

    info!("stdin closed");
    Ok(())
}
