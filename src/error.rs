//! Error type shared by the library and the binaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A Goldbach target must be an even integer greater than 2
    #[error("{0} is not an even number greater than 2")]
    InvalidTarget(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Input stream closed while a value was still expected
    #[error("input ended before a value was entered")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
