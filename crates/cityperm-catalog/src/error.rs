use camino::Utf8PathBuf;

/// Failures while loading a location catalog. All of them abort the load;
/// no partial catalog is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("location source unavailable: {path}")]
    SourceUnavailable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {found} of {expected} fields")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("failed to read location record at line {line}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
