use std::path::PathBuf;

use thiserror::Error;

/// Typed errors for applist operations.
/// The binary wraps these in `anyhow` for reporting,
/// but modules stay precise about what failed and where.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source file missing, unreadable, or not valid UTF-8
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registration line without enough comma-separated fields
    #[error(
        "Malformed declaration at '{}' line {line_number}: expected at least {expected} comma-separated fields in `{line}`",
        path.display()
    )]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        expected: usize,
        line: String,
    },

    /// Configuration file is invalid
    #[error("Config error in '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Problems with the contents of a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("marker must not be empty")]
    EmptyMarker,
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
