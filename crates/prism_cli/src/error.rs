use std::{io, path::PathBuf};

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// CLI error types.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("Could not read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No block numbered {number}; the reply has {available} code block(s)")]
    NoSuchBlock { number: usize, available: usize },

    #[error("--select reads the selection from stdin; pass the reply as a file argument")]
    SelectNeedsFile,

    #[error("Terminal error: {0}")]
    Term(#[from] prism_term::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
