//! Configuration types for the threshold signature scheme.
//!
//! # Example
//!
//! ```rust
//! use tsig::ThresholdParameters;
//!
//! // 3-of-5 threshold signing
//! let params = ThresholdParameters::new(5, 3).expect("valid params");
//! assert_eq!(params.parties, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Threshold signing parameters.
///
/// - `parties`: total number of key shares dealt (n)
/// - `threshold`: minimum number of partial signatures needed to recover
///   the aggregate signature (k)
///
/// Any `k` of the `n` shares suffice to sign; fewer than `k` reveal nothing
/// about the master secret.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ThresholdParameters {
    /// Total number of participants (n).
    pub parties: usize,
    /// Number of partial signatures required for recovery (k).
    pub threshold: usize,
}

impl ThresholdParameters {
    /// Creates and validates threshold parameters.
    pub fn new(parties: usize, threshold: usize) -> Result<Self, Error> {
        let params = Self { parties, threshold };
        params.validate()?;
        Ok(params)
    }

    /// Checks `1 <= threshold <= parties`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.threshold == 0 {
            return Err(Error::InvalidConfig(
                "threshold must be greater than 0".into(),
            ));
        }
        if self.parties < self.threshold {
            return Err(Error::InvalidConfig(
                "threshold must be less than or equal to parties".into(),
            ));
        }
        Ok(())
    }
}
