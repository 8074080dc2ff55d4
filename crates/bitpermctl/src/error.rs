use thiserror::Error;

/// Error type for command-line operations.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Permission(#[from] bitperm::Error),
    #[error("permission table: {0}")]
    Table(#[from] bitperm::TableError),
    #[error("output: {0}")]
    Output(#[from] std::io::Error),
}
