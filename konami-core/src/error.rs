//! Error types for konami-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Key sequence is empty")]
    EmptySequence,

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
