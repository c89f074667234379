//! Scalar field of BN254.
//!
//! Secret shares, participant ids and Lagrange coefficients all live in
//! `Fr`, the prime field of the curve's group order. The [`FieldElement`]
//! trait is the small surface the rest of the crate needs from a scalar
//! type; arithmetic itself goes through the arkworks operator impls.

use std::fmt::Debug;

use ark_ff::{Field, One, UniformRand, Zero};
use rand_core::RngCore;

/// The BN254 scalar field.
pub type Fr = ark_bn254::Fr;

/// Scalar field element abstraction.
///
/// # Example
///
/// ```rust
/// use tsig::{FieldElement, Fr};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let a = Fr::random(&mut rng);
/// let inv = a.invert().expect("non-zero element");
/// assert_eq!(a * inv, Fr::one());
/// ```
pub trait FieldElement: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Samples a uniform field element from the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Converts a small integer into the field.
    fn from_u64(n: u64) -> Self;
}

impl FieldElement for Fr {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }

    fn invert(&self) -> Option<Self> {
        self.inverse()
    }

    fn from_u64(n: u64) -> Self {
        Fr::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn inversion_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            let a = Fr::random(&mut rng);
            if a == <Fr as FieldElement>::zero() {
                continue;
            }
            let inv = a.invert().unwrap();
            assert_eq!(a * inv, <Fr as FieldElement>::one());
        }
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(<Fr as FieldElement>::zero().invert().is_none());
    }
}
