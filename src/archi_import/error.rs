use std::path::PathBuf;
use thiserror::Error;

use crate::model::ELEMENTS_FILE_NAME;

#[derive(Error, Debug)]
pub enum ArchiError {
    #[error(
        "output filename should either be an existing directory or end with '{}'.",
        ELEMENTS_FILE_NAME
    )]
    InvalidOutput(PathBuf),

    #[error("Failed to read names from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write csv to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Encoded csv is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ArchiError>;
