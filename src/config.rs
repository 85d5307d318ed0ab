use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::info;

use crate::error::Result;
use crate::source::Source;
use crate::writer::write_csv;

/// TWSE open data endpoint for the listed company profile dataset.
pub const DEFAULT_URL: &str = "https://openapi.twse.com.tw/v1/opendata/t187ap04_L";
/// Where the CSV lands when no output path is given.
pub const DEFAULT_OUTPUT: &str = "data/t187ap04_L.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Remote {
                url: DEFAULT_URL.to_string(),
            },
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// A local `input` selects local mode; otherwise `url` (or the default
    /// endpoint) is fetched.
    pub fn from_parts(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        url: Option<String>,
    ) -> Self {
        let source = match input {
            Some(path) => Source::Local(path),
            None => Source::Remote {
                url: url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            },
        };
        Self {
            source,
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

/// Load the records and write them out. Returns the number of rows written.
pub fn run(config: &Config) -> Result<usize> {
    run_with(&Client::new(), config)
}

/// Like [`run`], reusing `client` when the source is remote.
pub fn run_with(client: &Client, config: &Config) -> Result<usize> {
    let records = config.source.load_with(client)?;
    info!(records = records.len(), "records loaded");
    write_csv(&records, &config.output)
}
