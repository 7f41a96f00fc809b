// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised while loading gallery configuration or product data.
///
/// The gallery itself never surfaces these to the user: failed variant
/// transitions and malformed payloads degrade to "do nothing" at the
/// component boundary. The error type exists so the loading layer can
/// report precisely what went wrong in logs.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Product(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
            Error::Product(msg) => write!(f, "product data error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Product(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
