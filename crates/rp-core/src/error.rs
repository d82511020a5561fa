/// Alias for `Result<T, FieldError>`.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors reported by the ripple field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The requested size, resolution, or derived grid is unusable.
    #[error("invalid field configuration: {0}")]
    InvalidConfig(String),

    /// A cell coordinate lies outside the grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}
