use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod core;
mod refactor;

#[derive(Parser)]
#[command(name = "retheme")]
#[command(author, version)]
#[command(
    about = "Rename the dark-* Tailwind palette classes to site-* across the front-end",
    long_about = "Applies a fixed table of literal class-name substitutions to a fixed list of \
                  front-end source files under ROOT, reporting one line per file. Missing or \
                  unreadable files are reported and skipped; the rest of the batch still runs."
)]
struct Cli {
    /// Project root the file list is resolved against (defaults to current directory)
    root: Option<PathBuf>,

    /// Show what would change without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for per-file status lines
    let filter = if cli.verbose { "retheme=debug" } else { "retheme=info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    commands::apply::run(cli.root, cli.dry_run, &cli.format)
}
