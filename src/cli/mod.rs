pub mod amoeba;
pub mod completions;
pub mod pegboard;
pub mod star;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cutpath - SVG template generator for laser cutting and CNC
#[derive(Parser, Debug)]
#[command(name = "cutpath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./cutpath.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a three-point star with tip circles (inches)
    Star(star::StarArgs),

    /// Generate a lobed amoeba outline (inches)
    Amoeba(amoeba::AmoebaArgs),

    /// Generate a centered pegboard hole grid (millimetres)
    Pegboard(pegboard::PegboardArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
