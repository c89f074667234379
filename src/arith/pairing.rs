//! Bilinear pairing backend.
//!
//! [`PairingBackend`] bundles the scalar field, both source groups and the
//! target group behind one set of associated types, so the scheme code
//! never names a concrete curve. [`PairingEngine`] is the BN254
//! instantiation used by this crate.

use std::fmt::Debug;

use ark_bn254::Bn254;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::Zero;

use crate::arith::field::{FieldElement, Fr};
use crate::arith::group::{CurvePoint, G1, G2};
use crate::errors::ArithError;

/// Pairing target group abstraction; verification only needs identity and
/// equality.
pub trait TargetGroup: Clone + Copy + Debug + PartialEq + 'static {
    fn identity() -> Self;
}

/// A pairing-friendly curve: scalar field, source groups, target group and
/// the pairing map itself.
pub trait PairingBackend: Debug + Send + Sync + 'static {
    type Scalar: FieldElement;
    type G1: CurvePoint<Self::Scalar>;
    type G2: CurvePoint<Self::Scalar>;
    type Target: TargetGroup;

    /// Evaluates `e(g1, g2)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Evaluates the product of pairings `prod_i e(g1[i], g2[i])`.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, ArithError>;
}

/// Target group of the BN254 pairing.
pub type Gt = PairingOutput<Bn254>;

impl TargetGroup for Gt {
    fn identity() -> Self {
        <Gt as Zero>::zero()
    }
}

/// The BN254 pairing backend.
#[derive(Debug)]
pub struct PairingEngine;

impl PairingBackend for PairingEngine {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Bn254::pairing(g1.0, g2.0)
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, ArithError> {
        if g1.len() != g2.len() {
            return Err(ArithError::InvalidPoint);
        }
        let g1_proj: Vec<_> = g1.iter().map(|p| p.0).collect();
        let g2_proj: Vec<_> = g2.iter().map(|p| p.0).collect();
        Ok(Bn254::multi_pairing(g1_proj, g2_proj))
    }
}
