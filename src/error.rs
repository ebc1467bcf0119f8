//! Crate error type
//!
//! Only the outer surfaces return errors: configuration, storage files and
//! document IO. Controller operations never fail; a missing element or
//! variant is a silent no-op.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration file is not valid TOML
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Local storage could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// Stored state is not valid JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
