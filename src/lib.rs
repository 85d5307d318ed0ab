//! Fetch the TWSE listed-company open data (or read a saved copy) and
//! write it out as CSV.

pub mod config;
pub mod error;
pub mod fieldnames;
pub mod record;
pub mod source;
pub mod writer;

pub use config::{Config, DEFAULT_OUTPUT, DEFAULT_URL, run, run_with};
pub use error::{Error, Result};
pub use fieldnames::collect_fieldnames;
pub use record::{Record, parse_records};
pub use source::{Source, fetch_records, load_records_from_file};
pub use writer::write_csv;
