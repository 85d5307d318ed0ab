use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading records or writing the CSV projection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected status code {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
    #[error("{origin}: expected a JSON array of objects, found {found}")]
    Shape { origin: String, found: &'static str },
    #[error("{origin}: element {index} is {found}, expected a JSON object")]
    NotAnObject {
        origin: String,
        index: usize,
        found: &'static str,
    },
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed writing CSV to {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("no records to write")]
    NoRecords,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status carried by a rejected remote fetch.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
