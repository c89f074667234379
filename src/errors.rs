//! Error types for the crate.
//!
//! Two layers, mirroring how failures actually arise: [`ArithError`] for
//! field- and curve-level problems (non-canonical elements, off-curve
//! coordinates, degenerate interpolation ids), and [`Error`] for
//! protocol-facing failures (bad parameters, too few shares, malformed
//! serialized inputs).

use thiserror::Error;

/// Errors raised by the field and curve arithmetic layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithError {
    /// A field element was outside the canonical range [0, modulus).
    #[error("field element is not in canonical range")]
    InvalidFieldElement,

    /// Coordinates do not describe a point on the curve (or its subgroup).
    #[error("coordinates are not a valid curve point")]
    InvalidPoint,

    /// A participant id of zero was supplied to interpolation.
    #[error("interpolation ids must be nonzero")]
    ZeroId,

    /// Two equal participant ids were supplied to interpolation.
    #[error("interpolation ids must be pairwise distinct")]
    DuplicateId,
}

/// High-level errors returned by the threshold signature API.
#[derive(Debug, Error)]
pub enum Error {
    /// Parameters rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Arithmetic-level failure.
    #[error("arithmetic error: {0}")]
    Arith(#[from] ArithError),

    /// Recovery was attempted with fewer partial signatures than the
    /// threshold. Detected up front, never inferred from a failed
    /// verification.
    #[error("insufficient shares: required {required}, provided {provided}")]
    InsufficientShares { required: usize, provided: usize },

    /// A serialized scalar or point had the wrong byte length.
    #[error("serialized length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A hex string could not be decoded.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    /// The try-and-increment mapping exhausted its attempt budget.
    #[error("could not map message to a curve point")]
    HashToPointFailed,
}
