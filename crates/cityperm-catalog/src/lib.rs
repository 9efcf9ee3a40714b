//! Location catalog adapter: read and parse the CSV location source.
//!
//! This crate is allowed to do filesystem IO. Loading is fail-fast: the first
//! unreadable or malformed record aborts the load and nothing is returned.

#![forbid(unsafe_code)]

mod error;
mod parse;

use camino::Utf8Path;
use cityperm_domain::model::Location;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use tracing::{debug, info};

pub use error::CatalogError;
pub use parse::FIELDS_PER_RECORD;

/// How the CSV source is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Skip the first row as a header.
    pub has_headers: bool,
}

/// Load the catalog at `path`, preserving record order.
pub fn load_catalog(
    path: &Utf8Path,
    options: CatalogOptions,
) -> Result<Vec<Location>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::SourceUnavailable {
        path: path.to_owned(),
        source,
    })?;
    let locations = read_catalog(file, options)?;
    info!(path = %path, locations = locations.len(), "catalog loaded");
    Ok(locations)
}

/// Parse a catalog from any reader. Blank lines are skipped; every other line is a record.
pub fn read_catalog<R: Read>(
    reader: R,
    options: CatalogOptions,
) -> Result<Vec<Location>, CatalogError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| CatalogError::Csv {
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        out.push(parse::location_from_record(&record, line)?);
    }

    debug!(records = out.len(), "catalog parsed");
    Ok(out)
}
