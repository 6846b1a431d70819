use thiserror::Error;

/// Errors raised by kernel operations
///
/// All of them are fail-fast: the operation stops at the first violation
/// and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Operand shapes cannot be combined
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Operation requires a square matrix
    #[error("Matrix needs to be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Inversion of a matrix whose determinant is exactly zero
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// Operand combination is declared but not allowed
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Operation depends on an eigendecomposition
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Positional access past the end of a container
    #[error("Index {index} is out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl MathError {
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        MathError::DimensionMismatch(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        MathError::Unsupported(msg.into())
    }

    pub fn not_implemented(what: impl Into<String>) -> Self {
        MathError::NotImplemented(what.into())
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        MathError::IndexOutOfBounds { index, len }
    }
}

/// Result type for kernel operations
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violation() {
        let e = MathError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "Matrix needs to be square, got 2x3");

        let e = MathError::out_of_bounds(4, 3);
        assert_eq!(e.to_string(), "Index 4 is out of bounds (len: 3)");
    }
}
