use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a word list backing a root word source or dictionary.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no word list files found in {path}")]
    EmptyDirectory { path: PathBuf },
}
