//! wildshore - a deterministic top-down survival action game
//!
//! Headless executable: runs the fixed-step simulation with scripted or
//! neutral input. Rendering and audio hosts drive the same session type
//! through `wildshore-sim`.

mod config;
mod headless;
mod input;
mod scripted_input;

use anyhow::Result;
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // WARN by default; override via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting wildshore v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let tunables = match &cli.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };

    // One minute of simulated time unless told otherwise.
    let max_ticks = cli.max_ticks.unwrap_or(3_600);

    headless::run(headless::HeadlessConfig {
        tunables,
        seed: cli.seed,
        max_ticks,
        script: cli.script,
    })
}

struct CliOptions {
    seed: Option<u64>,
    max_ticks: Option<u64>,
    script: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            seed: None,
            max_ticks: None,
            script: None,
            config: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.seed = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--seed must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--seed requires an integer");
                    }
                }
                "--ticks" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.max_ticks = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--ticks must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--ticks requires an integer");
                    }
                }
                "--script" => {
                    if let Some(path) = args.next() {
                        opts.script = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--script requires a file path");
                    }
                }
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                _ => {}
            }
        }

        opts
    }
}
