use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fieldnames::collect_fieldnames;
use crate::record::Record;

/// Write `records` to `path` as CSV, returning the number of data rows.
///
/// The header is the first-seen union of keys; a record missing a key gets
/// an empty cell. Rows end with CRLF. The parent directory is created when absent and the file
/// is overwritten in full. An empty slice fails with [`Error::NoRecords`]
/// before anything touches the filesystem.
pub fn write_csv(records: &[Record], path: &Path) -> Result<usize> {
    if records.is_empty() {
        return Err(Error::NoRecords);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::FileAccess {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let fieldnames = collect_fieldnames(records);
    debug!(columns = fieldnames.len(), "collected fieldnames");

    let file = File::create(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(BufWriter::new(file));
    let csv_err = |source: csv::Error| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    wtr.write_record(&fieldnames).map_err(csv_err)?;

    for record in records {
        let row = fieldnames
            .iter()
            .map(|k| record.get(k).map(String::as_str).unwrap_or_default());
        wtr.write_record(row).map_err(csv_err)?;
    }

    wtr.flush().map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = records.len(), "CSV written");
    Ok(records.len())
}
