use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gifsplit", about = "Split an animated GIF into numbered PNG frames")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write every frame of a GIF to its own PNG file.
    Extract {
        /// Path to the input GIF file.
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the frame files into.
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Base name for the frame files (default: the input's file stem).
        #[arg(short, long)]
        base: Option<String>,
    },
}
