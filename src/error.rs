use std::path::PathBuf;

use caged_engine::CagedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Engine(#[from] CagedError),

    #[error("Error reading '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
