//! redrop CLI
//!
//! Command-line front end for the snippet preprocessor: reads the file,
//! selects the range, prints the statement list.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use redrop::prelude::*;

/// Emit reversing DROP statements for a slice of a SQL source file.
#[derive(Parser)]
#[command(name = "redrop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL source file to preprocess.
    file: PathBuf,

    /// First line of the snippet (1-indexed, inclusive; start of file if omitted).
    #[arg(short = 'f', long = "from")]
    from: Option<u32>,

    /// Last line of the snippet (1-indexed, inclusive; end of file if omitted).
    #[arg(short = 't', long = "to")]
    to: Option<u32>,

    /// Schema for `set search_path`; pass an empty string to emit no
    /// search-path statement at all.
    #[arg(short, long)]
    search_path: Option<String>,

    /// Prepend `\set ON_ERROR_STOP on` for interactive psql sessions.
    #[arg(short, long)]
    interactive: bool,

    /// Reproduce the selected source lines after the drop statements.
    #[arg(long)]
    with_source: bool,

    /// Marker file identifying the project root.
    #[arg(long, env = "REDROP_MARKER", default_value = DEFAULT_MARKER)]
    marker: String,

    /// Folder whose child directories name schemas.
    #[arg(long, env = "REDROP_SCHEMA_DIR", default_value = DEFAULT_SCHEMA_DIR)]
    schema_dir: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !cli.file.exists() {
        return Err(RedropError::MissingFile(cli.file).into());
    }

    let source = std::fs::read_to_string(&cli.file)?;
    let range = LineRange::new(cli.from, cli.to)?;
    let search_path = SearchPath::from_option(cli.search_path);

    let selection = select(&source, &range, search_path.is_given());
    debug!("selected {} line(s)", selection.lines.len());

    let dir = cli
        .file
        .canonicalize()?
        .parent()
        .map_or_else(PathBuf::new, Path::to_path_buf);
    let lookup = ConventionLookup::new(dir, &cli.marker, &cli.schema_dir);

    let statements = generate(&selection, &search_path, cli.interactive, &lookup)?;

    for statement in &statements {
        println!("{statement}");
    }
    if cli.with_source {
        for line in &selection.lines {
            println!("{line}");
        }
    }

    Ok(())
}
