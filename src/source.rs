use std::fs;
use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Record, parse_records};

/// Where the record sequence comes from. Exactly one is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single GET against the open data endpoint.
    Remote { url: String },
    /// A previously downloaded JSON file.
    Local(PathBuf),
}

impl Source {
    pub fn load(&self) -> Result<Vec<Record>> {
        self.load_with(&Client::new())
    }

    /// Like [`Source::load`], reusing `client` for remote mode.
    pub fn load_with(&self, client: &Client) -> Result<Vec<Record>> {
        match self {
            Source::Remote { url } => fetch_records(client, url),
            Source::Local(path) => load_records_from_file(path),
        }
    }
}

/// Download `url` and parse the body as an array of records.
///
/// Anything other than `200 OK` is rejected with the observed status and
/// the body is not read.
pub fn fetch_records(client: &Client, url: &str) -> Result<Vec<Record>> {
    info!(url, "fetching open data");
    let request_err = |source: reqwest::Error| Error::Request {
        url: url.to_string(),
        source,
    };

    let resp = client.get(url).send().map_err(request_err)?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.text().map_err(request_err)?;
    let records = parse_records(&body, url)?;
    debug!(records = records.len(), "parsed remote records");
    Ok(records)
}

/// Read a UTF-8 JSON file holding an array of records.
pub fn load_records_from_file(path: &Path) -> Result<Vec<Record>> {
    info!(path = %path.display(), "loading records from file");
    let text = fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text, &path.display().to_string())?;
    debug!(records = records.len(), "parsed local records");
    Ok(records)
}
