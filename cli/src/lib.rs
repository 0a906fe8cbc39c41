//! `fizzbuzz` entry point.
//!
//! Run without arguments, classifies `1..=3` into a default buffer and exits
//! 0. The markers are not printed; they show up in `debug` log records only
//! (`RUST_LOG=fizzbuzz_cli=debug`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fizzbuzz_classify::{BufferConfig, MarkerBuffer, OverflowPolicy, classify, load_buffer_config};

/// Upper bound used when `--max` is not given.
pub const DEFAULT_MAX: usize = 3;

/// Classify 1..=max into a marker buffer
#[derive(Debug, Parser)]
#[command(name = "fizzbuzz", version)]
pub struct Cli {
    /// Upper bound (inclusive) of the classified range
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX)]
    pub max: usize,

    /// Buffer config file (default: ./fizzbuzz.toml, then ~/.config/fizzbuzz/fizzbuzz.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grow the buffer instead of rejecting a max past its last cell
    #[arg(long)]
    pub grow: bool,
}

impl Cli {
    /// Buffer config from file, with `--grow` applied on top.
    pub fn buffer_config(&self) -> anyhow::Result<BufferConfig> {
        let mut config = load_buffer_config(self.config.as_deref())
            .context("Failed to load buffer configuration")?;
        if self.grow {
            config.overflow = OverflowPolicy::Grow;
        }
        Ok(config)
    }

    pub fn run(&self) -> anyhow::Result<MarkerBuffer> {
        let config = self.buffer_config()?;
        let mut buffer = MarkerBuffer::from_config(&config)
            .context("Failed to allocate the marker buffer")?;

        classify(self.max, &mut buffer)
            .with_context(|| format!("Failed to classify 1..={}", self.max))?;

        tracing::debug!(
            max = self.max,
            capacity = buffer.capacity(),
            markers = ?buffer.markers(),
            "fizzbuzz run finished"
        );
        Ok(buffer)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
