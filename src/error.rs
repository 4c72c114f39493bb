use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures. Rejected posts are not errors and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open input file {}: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    /// Read error in the middle of the input stream.
    #[error("failed to iterate over input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config JSON {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
