//! Structural errors raised by the field calculations.
//!
//! Numerical degeneracy (coincident source and observation points, too few
//! segments, zero current) is never reported here; it shows up in the
//! returned values instead.

use thiserror::Error;

/// Errors from the field kernels and generators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Coordinate or output slices that must share a length do not.
    #[error("input length mismatch: {0}")]
    LengthMismatch(&'static str),
}
