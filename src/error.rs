//! Error types for the MHD core.
//!
//! Every public grid entry point validates its inputs and returns
//! [`MhdError`] instead of reading or writing out of bounds. Numerical
//! degeneracies inside a sweep are *not* errors by default; they are counted in
//! [`NumericalDiagnostics`](crate::diagnostics::NumericalDiagnostics) and only
//! become [`MhdError::NumericalDegeneracy`] when the caller asks for it.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MhdError>;

/// Errors reported by the MHD core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MhdError {
    /// Ghost width is too small for the widest stencil.
    #[error("Insufficient ghost cells: need at least {required}, got {actual}")]
    InsufficientGhosts { required: usize, actual: usize },

    /// Two fields that must share a grid do not.
    #[error("Shape mismatch for {field}: expected {expected}, got {actual}")]
    ShapeMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// A field's component count disagrees with the variable layout.
    #[error("Layout mismatch for {field}: layout has {expected} variables, field has {actual}")]
    LayoutMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The variable layout itself is malformed.
    #[error("Invalid variable layout: {0}")]
    InvalidLayout(String),

    /// A scalar parameter is outside its valid range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Raw data does not match the requested shape.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// A sweep produced degenerate wave fans or non-finite fluxes.
    #[error("Numerical degeneracy: {0}")]
    NumericalDegeneracy(String),
}

impl MhdError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(
        field: &'static str,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::ShapeMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Whether this error is a caller precondition violation rather than a
    /// numerical event.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::NumericalDegeneracy(_))
    }
}
