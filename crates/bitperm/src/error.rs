use thiserror::Error;

/// Error type for registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No definition in the table carries this name.
    #[error("Permission [{0}] not found.")]
    NotFound(String),
}

/// Convenient result alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reading permission tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml deserialize error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
}
