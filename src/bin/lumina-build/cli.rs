//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Build the Lumina engine with one of its examples, then run it
#[derive(Parser)]
#[command(name = "lumina-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target to build: desktop (default), web, or examples
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Build with optimizations instead of debug info
    #[arg(long)]
    pub release: bool,

    /// Build and stage, but do not run the binary or start the server
    #[arg(long)]
    pub no_run: bool,

    /// Do not open a browser for web builds
    #[arg(long)]
    pub no_open: bool,

    /// Print the resolved build profile as JSON and exit
    #[arg(long)]
    pub plan: bool,

    /// Engine checkout to build (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = "LUMINA_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
