use thiserror::Error;

/// Everything that can go wrong when building or combining matrices.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A row does not have the same length as the others.
    #[error("row {row} has {found} elements, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Element-wise operation between matrices of different shapes.
    #[error("shape mismatch: {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Product where `lhs` columns and `rhs` rows disagree.
    #[error("cannot multiply {lhs:?} by {rhs:?}: inner dimensions differ")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("a matrix needs at least one row and one column")]
    Empty,

    #[error("matrix is not populated: {filled} of {expected} rows set")]
    Unpopulated { expected: usize, filled: usize },

    #[error("matrix already holds its {rows} rows")]
    TooManyRows { rows: usize },

    #[error("row index {index} out of bounds for {rows} rows")]
    RowOutOfBounds { index: usize, rows: usize },

    #[error("empty sampling range")]
    InvalidRange,

    #[error("line {line}: cannot parse {token:?}")]
    Parse { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
