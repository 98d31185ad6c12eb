use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "roikit",
    version,
    about = "Plot stacks and ROI brush tooling for image analysis"
)]
pub(super) struct Cli {
    /// Settings file (JSON or YAML); built-in defaults are used when omitted.
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Builds a plot stack and prints its size, depth and dimensions.
    Info {
        #[arg(long)]
        plots: PathBuf,
    },
    /// Renders one slice (1-based) of a plot stack.
    Render {
        #[arg(long)]
        plots: PathBuf,
        #[arg(long)]
        slice: usize,
        #[arg(long)]
        output: PathBuf,
    },
    Export {
        #[arg(long)]
        plots: PathBuf,
        #[arg(long)]
        output_dir: PathBuf,
    },
    /// Replays a recorded brush stroke and writes the resulting ROI mask.
    Brush {
        #[arg(long)]
        stroke: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        diameter: Option<u32>,
    },
    /// Prints the default settings as JSON.
    Defaults,
}
