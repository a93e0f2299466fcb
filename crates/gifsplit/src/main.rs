mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gifsplit_core::extract::{self, ExtractConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Extract {
            input,
            output_dir,
            base,
        } => {
            let config = ExtractConfig {
                output_dir,
                base_name: base,
            };

            let written = extract::extract_frames(&input, &config)
                .with_context(|| format!("failed to split {}", input.display()))?;

            info!(
                frame_count = written.len(),
                output_dir = ?config.output_dir,
                "all frames written"
            );

            Ok(())
        }
    }
}
