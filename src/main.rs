use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use twse_opendata::{Config, DEFAULT_OUTPUT, Source};

/// Download the TWSE t187ap04_L dataset, or convert a downloaded JSON file, to CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Previously downloaded JSON file (if omitted, fetch from the API)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the CSV output
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Endpoint to fetch in remote mode
    #[arg(long, hide = true)]
    url: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI flags
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_parts(cli.input, Some(cli.output), cli.url);

    let what = match &config.source {
        Source::Remote { url } => url.clone(),
        Source::Local(path) => path.display().to_string(),
    };
    let rows = twse_opendata::run(&config)
        .with_context(|| format!("Cannot convert {} to {}", what, config.output.display()))?;

    println!(
        "Wrote {} records from {} to {}.",
        rows,
        what,
        config.output.display()
    );
    Ok(())
}
