//! Fixed-width big-endian encoding of scalars and curve points.
//!
//! This is the on-chain convention of the EVM pairing precompiles, which
//! the external verifier contract consumes byte for byte:
//!
//! - scalars and base-field coordinates: 32 bytes (64 hex chars)
//! - G1 points: affine `x || y`, 64 bytes (128 hex chars)
//! - G2 points: `x.c1 || x.c0 || y.c1 || y.c0`, 128 bytes (256 hex chars),
//!   imaginary component first as in EIP-197
//! - the identity of either group encodes as all zeros
//!
//! A coordinate-order or width mismatch here does not produce a format
//! error downstream, it produces a signature that silently fails to
//! verify; the known-answer tests below pin the layout against the
//! published BN254 generator coordinates.
//!
//! Decoding is strict: wrong lengths, non-canonical field values and
//! off-curve (or out-of-subgroup, for G2) coordinates are all rejected.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;

use crate::arith::field::Fr;
use crate::arith::fp::{fe_from_be_bytes, fe_to_be_bytes};
use crate::arith::group::{CurvePoint, G1, G2};
use crate::errors::{ArithError, Error};

/// Serialized width of a scalar or base-field coordinate.
pub const SCALAR_BYTES: usize = 32;
/// Serialized width of a G1 point.
pub const G1_BYTES: usize = 64;
/// Serialized width of a G2 point.
pub const G2_BYTES: usize = 128;

fn expect_len(bytes: &[u8], expected: usize) -> Result<(), Error> {
    if bytes.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn coordinate(bytes: &[u8]) -> Result<Fq, Error> {
    let mut buf = [0u8; SCALAR_BYTES];
    buf.copy_from_slice(bytes);
    Ok(fe_from_be_bytes::<Fq>(&buf)?)
}

/// Encodes a scalar as 32 big-endian bytes.
pub fn scalar_to_bytes(scalar: &Fr) -> [u8; SCALAR_BYTES] {
    fe_to_be_bytes(scalar)
}

/// Decodes a 32-byte big-endian scalar, rejecting values at or above the
/// group order.
pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Fr, Error> {
    expect_len(bytes, SCALAR_BYTES)?;
    let mut buf = [0u8; SCALAR_BYTES];
    buf.copy_from_slice(bytes);
    Ok(fe_from_be_bytes::<Fr>(&buf)?)
}

/// Encodes a G1 point as affine `x || y`; the identity becomes all zeros.
pub fn g1_to_bytes(point: &G1) -> [u8; G1_BYTES] {
    let mut out = [0u8; G1_BYTES];
    if let Some((x, y)) = point.to_affine().xy() {
        out[..32].copy_from_slice(&fe_to_be_bytes(&x));
        out[32..].copy_from_slice(&fe_to_be_bytes(&y));
    }
    out
}

/// Decodes a 64-byte G1 point.
pub fn g1_from_bytes(bytes: &[u8]) -> Result<G1, Error> {
    expect_len(bytes, G1_BYTES)?;
    if bytes.iter().all(|b| *b == 0) {
        return Ok(G1::identity());
    }
    let x = coordinate(&bytes[..32])?;
    let y = coordinate(&bytes[32..])?;
    let affine = G1Affine::new_unchecked(x, y);
    // Cofactor 1: on-curve implies in-subgroup for BN254 G1.
    if !affine.is_on_curve() {
        return Err(ArithError::InvalidPoint.into());
    }
    Ok(G1::from_affine(&affine))
}

/// Encodes a G2 point as `x.c1 || x.c0 || y.c1 || y.c0`; the identity
/// becomes all zeros.
pub fn g2_to_bytes(point: &G2) -> [u8; G2_BYTES] {
    let mut out = [0u8; G2_BYTES];
    if let Some((x, y)) = point.to_affine().xy() {
        out[..32].copy_from_slice(&fe_to_be_bytes(&x.c1));
        out[32..64].copy_from_slice(&fe_to_be_bytes(&x.c0));
        out[64..96].copy_from_slice(&fe_to_be_bytes(&y.c1));
        out[96..].copy_from_slice(&fe_to_be_bytes(&y.c0));
    }
    out
}

/// Decodes a 128-byte G2 point, including the subgroup check.
pub fn g2_from_bytes(bytes: &[u8]) -> Result<G2, Error> {
    expect_len(bytes, G2_BYTES)?;
    if bytes.iter().all(|b| *b == 0) {
        return Ok(G2::identity());
    }
    let x = Fq2::new(coordinate(&bytes[32..64])?, coordinate(&bytes[..32])?);
    let y = Fq2::new(coordinate(&bytes[96..])?, coordinate(&bytes[64..96])?);
    let affine = G2Affine::new_unchecked(x, y);
    if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
        return Err(ArithError::InvalidPoint.into());
    }
    Ok(G2::from_affine(&affine))
}

/// Encodes a scalar as 64 lowercase hex chars.
pub fn scalar_to_hex(scalar: &Fr) -> String {
    hex::encode(scalar_to_bytes(scalar))
}

/// Decodes a scalar from its 64-char hex form.
pub fn scalar_from_hex(s: &str) -> Result<Fr, Error> {
    scalar_from_bytes(&hex::decode(s)?)
}

/// Encodes a G1 point as 128 lowercase hex chars.
pub fn g1_to_hex(point: &G1) -> String {
    hex::encode(g1_to_bytes(point))
}

/// Decodes a G1 point from its 128-char hex form.
pub fn g1_from_hex(s: &str) -> Result<G1, Error> {
    g1_from_bytes(&hex::decode(s)?)
}

/// Encodes a G2 point as 256 lowercase hex chars.
pub fn g2_to_hex(point: &G2) -> String {
    hex::encode(g2_to_bytes(point))
}

/// Decodes a G2 point from its 256-char hex form.
pub fn g2_from_hex(s: &str) -> Result<G2, Error> {
    g2_from_bytes(&hex::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::field::FieldElement;
    use rand::{rngs::StdRng, SeedableRng};

    // Published alt_bn128 generator coordinates.
    const G1_GEN_HEX: &str = concat!(
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000002",
    );
    const G2_GEN_HEX: &str = concat!(
        "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
        "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
        "090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b",
        "12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
    );

    #[test]
    fn g1_generator_known_answer() {
        assert_eq!(g1_to_hex(&G1::generator()), G1_GEN_HEX);
        assert_eq!(g1_from_hex(G1_GEN_HEX).unwrap(), G1::generator());
    }

    #[test]
    fn g2_generator_known_answer() {
        assert_eq!(g2_to_hex(&G2::generator()), G2_GEN_HEX);
        assert_eq!(g2_from_hex(G2_GEN_HEX).unwrap(), G2::generator());
    }

    #[test]
    fn point_round_trips() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..10 {
            let s = Fr::random(&mut rng);
            let p1 = G1::generator().mul_scalar(&s);
            let p2 = G2::generator().mul_scalar(&s);
            assert_eq!(g1_from_bytes(&g1_to_bytes(&p1)).unwrap(), p1);
            assert_eq!(g2_from_bytes(&g2_to_bytes(&p2)).unwrap(), p2);
        }
    }

    #[test]
    fn identity_encodes_as_zeros() {
        assert_eq!(g1_to_bytes(&G1::identity()), [0u8; G1_BYTES]);
        assert_eq!(g2_to_bytes(&G2::identity()), [0u8; G2_BYTES]);
        assert!(g1_from_bytes(&[0u8; G1_BYTES]).unwrap().is_identity());
        assert!(g2_from_bytes(&[0u8; G2_BYTES]).unwrap().is_identity());
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(matches!(
            g1_from_bytes(&[0u8; 63]),
            Err(Error::LengthMismatch {
                expected: 64,
                actual: 63
            })
        ));
        assert!(matches!(
            g2_from_bytes(&[0u8; 64]),
            Err(Error::LengthMismatch {
                expected: 128,
                actual: 64
            })
        ));
        assert!(matches!(
            scalar_from_bytes(&[0u8; 16]),
            Err(Error::LengthMismatch {
                expected: 32,
                actual: 16
            })
        ));
    }

    #[test]
    fn rejects_off_curve_coordinates() {
        // (1, 1) is not on y^2 = x^3 + 3.
        let mut bytes = [0u8; G1_BYTES];
        bytes[31] = 1;
        bytes[63] = 1;
        assert!(matches!(
            g1_from_bytes(&bytes),
            Err(Error::Arith(ArithError::InvalidPoint))
        ));
    }

    #[test]
    fn rejects_non_canonical_scalar() {
        // The group order itself is out of range.
        let order =
            hex::decode("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001")
                .unwrap();
        assert!(matches!(
            scalar_from_bytes(&order),
            Err(Error::Arith(ArithError::InvalidFieldElement))
        ));
    }

    #[test]
    fn scalar_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = Fr::random(&mut rng);
        let encoded = scalar_to_hex(&s);
        assert_eq!(encoded.len(), 2 * SCALAR_BYTES);
        assert_eq!(scalar_from_hex(&encoded).unwrap(), s);
    }
}
