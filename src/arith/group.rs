//! BN254 group operations.
//!
//! Wrappers around the arkworks projective points for G1 (signatures,
//! hashed messages) and G2 (public keys), behind the [`CurvePoint`] trait
//! the scheme is written against.

use std::fmt::Debug;

use ark_bn254::{G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup, VariableBaseMSM};
use ark_ff::Zero;

use crate::arith::field::Fr;
use crate::errors::ArithError;

/// Elliptic curve point abstraction over a scalar field `S`.
pub trait CurvePoint<S>: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Affine representation of this point type.
    type Affine;

    /// The group identity (point at infinity).
    fn identity() -> Self;

    /// The fixed group generator.
    fn generator() -> Self;

    fn is_identity(&self) -> bool;

    fn from_affine(affine: &Self::Affine) -> Self;

    fn to_affine(&self) -> Self::Affine;

    fn add(&self, other: &Self) -> Self;

    fn negate(&self) -> Self;

    fn mul_scalar(&self, scalar: &S) -> Self;

    /// Normalizes a batch of projective points with one shared inversion.
    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine>;

    /// Computes `sum(points[i] * scalars[i])`.
    ///
    /// Returns [`ArithError::InvalidPoint`] when the slice lengths differ.
    fn msm(points: &[Self], scalars: &[S]) -> Result<Self, ArithError>;
}

/// G1 group element (64-byte affine encoding; signatures live here).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(pub(crate) G1Projective);

/// G2 group element (128-byte affine encoding; public keys live here).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(pub(crate) G2Projective);

impl CurvePoint<Fr> for G1 {
    type Affine = G1Affine;

    fn identity() -> Self {
        G1(G1Projective::zero())
    }

    fn generator() -> Self {
        G1(<G1Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        G1(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        G1(self.0 + other.0)
    }

    fn negate(&self) -> Self {
        G1(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G1(self.0 * scalar)
    }

    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine> {
        let projective: Vec<G1Projective> = points.iter().map(|p| p.0).collect();
        G1Projective::normalize_batch(&projective)
    }

    fn msm(points: &[Self], scalars: &[Fr]) -> Result<Self, ArithError> {
        let affine = Self::batch_normalize(points);
        G1Projective::msm(&affine, scalars)
            .map(G1)
            .map_err(|_| ArithError::InvalidPoint)
    }
}

impl CurvePoint<Fr> for G2 {
    type Affine = G2Affine;

    fn identity() -> Self {
        G2(G2Projective::zero())
    }

    fn generator() -> Self {
        G2(<G2Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        G2(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        G2(self.0 + other.0)
    }

    fn negate(&self) -> Self {
        G2(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G2(self.0 * scalar)
    }

    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine> {
        let projective: Vec<G2Projective> = points.iter().map(|p| p.0).collect();
        G2Projective::normalize_batch(&projective)
    }

    fn msm(points: &[Self], scalars: &[Fr]) -> Result<Self, ArithError> {
        let affine = Self::batch_normalize(points);
        G2Projective::msm(&affine, scalars)
            .map(G2)
            .map_err(|_| ArithError::InvalidPoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::field::FieldElement;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn msm_matches_naive_sum() {
        let mut rng = StdRng::seed_from_u64(11);
        let g = G1::generator();
        let points: Vec<G1> = (0..8)
            .map(|_| g.mul_scalar(&Fr::random(&mut rng)))
            .collect();
        let scalars: Vec<Fr> = (0..8).map(|_| Fr::random(&mut rng)).collect();

        let mut naive = G1::identity();
        for (p, s) in points.iter().zip(scalars.iter()) {
            naive = naive.add(&p.mul_scalar(s));
        }
        assert_eq!(G1::msm(&points, &scalars).unwrap(), naive);
    }

    #[test]
    fn msm_rejects_length_mismatch() {
        let g = G1::generator();
        assert_eq!(
            G1::msm(&[g], &[]),
            Err(ArithError::InvalidPoint)
        );
    }

    #[test]
    fn negate_cancels() {
        let g = G2::generator();
        assert!(g.add(&g.negate()).is_identity());
    }
}
