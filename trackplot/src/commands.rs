use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trackplot", version, about = "Multi-track well-log layout builder")]
pub struct Cli {
    /// Log pass summaries (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the layout of a plot definition
    Layout(LayoutArgs),
    /// Encode a JSON array of strings/nulls into integer codes
    Encode {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a set of mutually distant pastel colors
    Palette {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0.5)]
        pastel: f64,
    },
    /// List the built-in preset tracks
    Presets {
        #[arg(long, alias = "jq")]
        json_query: bool,
    },
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Plot definition file (.json or .toml)
    #[arg(long, conflicts_with = "preset")]
    pub definition: Option<PathBuf>,
    /// Lay out built-in preset tracks instead, left to right
    #[arg(long, value_delimiter = ',')]
    pub preset: Vec<String>,
    /// JSON array of depth rows
    #[arg(long)]
    pub depth: Option<PathBuf>,
    /// Layout settings file (.json or .toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Seed for curve color allocation
    #[arg(long)]
    pub seed: Option<u64>,
    /// Depth gridline interval; overrides the definition's
    #[arg(long)]
    pub grid: Option<f64>,
    /// Print the Plotly layout object instead of the engine output
    #[arg(long)]
    pub plotly: bool,
}
