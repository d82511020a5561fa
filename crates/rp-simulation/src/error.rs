use std::path::PathBuf;

use rp_core::FieldError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while configuring or building a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The ripple field rejected its parameters.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A run setting is out of range.
    #[error("invalid simulation config: {0}")]
    Config(String),

    /// A config file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A config document is not valid JSON for [`SimConfig`](crate::SimConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
