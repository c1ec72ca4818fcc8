use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading data, benchmarking a dataset or
/// persisting a report.
///
/// Only `DirectoryNotFound` on the top-level input directory (and a
/// failure to create the output directory) abort a suite run; everything
/// else is contained at file or dataset scope by the caller.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("file not found: '{0}'")]
    FileNotFound(PathBuf),

    #[error("failed to load '{path}': {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("directory not found: '{0}'")]
    DirectoryNotFound(PathBuf),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
