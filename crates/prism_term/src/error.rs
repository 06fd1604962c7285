use std::{fmt, io};

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Terminal interaction error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Format error: {0}")]
    Fmt(#[from] fmt::Error),
}
