//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Expected user mistakes (bad amounts, wrong menu keys, wrong PINs) are not
/// represented here; the session recovers from those locally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session is not authenticated")]
    NotAuthenticated,

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
