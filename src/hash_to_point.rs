//! Domain-separated message-to-curve mapping.
//!
//! The scheme only ever consumes this through the [`HashToPoint`] trait;
//! the mapping itself is a deployment decision, and the domain string must
//! be threaded through unchanged on every call or verification fails
//! silently on the other side.
//!
//! [`TryAndIncrement`] is the default implementation: the "TI" mapping
//! used by the EVM BLS contracts this crate pairs with. The message is
//! hashed to a base-field element `u = keccak256(domain || msg) mod p`,
//! then x = u, u+1, u+2, ... is scanned until `x^3 + 3` is a quadratic
//! residue; the first hit gives the point. BN254's G1 has cofactor 1, so
//! every curve point is already in the prime-order subgroup.

use ark_bn254::G1Affine;

use crate::arith::fp::{modulus_is_3_mod_4, sqrt, Fp};
use crate::arith::group::{CurvePoint, G1};
use crate::arith::pairing::{PairingBackend, PairingEngine};
use crate::errors::Error;
use sha3::{Digest, Keccak256};

/// Message-to-point boundary used by signing and verification.
///
/// Implementations must be deterministic: the whole scheme's correctness
/// (partial signatures over one message recombining into the master
/// signature) rests on every signer mapping the message identically.
pub trait HashToPoint<B: PairingBackend> {
    fn hash_to_point(&self, msg: &[u8]) -> Result<B::G1, Error>;
}

/// Increment budget before giving up. Each try fails with probability
/// about 1/2, so exhausting this is a ~2^-256 event.
const MAX_TRIES: usize = 256;

/// Try-and-increment mapping onto BN254 G1 with keccak256 hashing.
#[derive(Clone, Debug)]
pub struct TryAndIncrement {
    domain: Vec<u8>,
}

impl TryAndIncrement {
    /// Creates a mapper for the given domain-separation string.
    ///
    /// Panics if the base-field modulus is not ≡ 3 (mod 4); the square
    /// root used by the scan is unsound for any other modulus, so this is
    /// checked once at initialization.
    pub fn new(domain: impl AsRef<[u8]>) -> Self {
        assert!(
            modulus_is_3_mod_4(),
            "try-and-increment requires p = 3 mod 4"
        );
        Self {
            domain: domain.as_ref().to_vec(),
        }
    }

    /// The configured domain-separation string.
    pub fn domain(&self) -> &[u8] {
        &self.domain
    }

    fn hash_to_base(&self, msg: &[u8]) -> Fp {
        let mut hasher = Keccak256::new();
        hasher.update(&self.domain);
        hasher.update(msg);
        Fp::from_be_bytes_mod_order(&hasher.finalize())
    }
}

impl HashToPoint<PairingEngine> for TryAndIncrement {
    fn hash_to_point(&self, msg: &[u8]) -> Result<G1, Error> {
        let mut x = self.hash_to_base(msg);
        for _ in 0..MAX_TRIES {
            // y^2 = x^3 + 3 on BN254.
            let rhs = x.square() * x + Fp::from_u64(3);
            let (y, found) = sqrt(&rhs);
            if found {
                let affine = G1Affine::new_unchecked(x.into_inner(), y.into_inner());
                return Ok(G1::from_affine(&affine));
            }
            x = x + Fp::one();
        }
        Err(Error::HashToPointFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;

    #[test]
    fn mapping_is_deterministic() {
        let hasher = TryAndIncrement::new("testing evmbls");
        let a = hasher.hash_to_point(b"hello world").unwrap();
        let b = hasher.hash_to_point(b"hello world").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn output_is_on_curve() {
        let hasher = TryAndIncrement::new("testing evmbls");
        for msg in [&b"a"[..], b"hello world", b"", &[0u8; 64]] {
            let point = hasher.hash_to_point(msg).unwrap().to_affine();
            assert!(point.is_on_curve());
            assert!(!point.is_zero());
        }
    }

    #[test]
    fn distinct_messages_map_to_distinct_points() {
        let hasher = TryAndIncrement::new("testing evmbls");
        let a = hasher.hash_to_point(b"msg-1").unwrap();
        let b = hasher.hash_to_point(b"msg-2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn domain_separates() {
        let first = TryAndIncrement::new("domain-a");
        let second = TryAndIncrement::new("domain-b");
        let a = first.hash_to_point(b"same message").unwrap();
        let b = second.hash_to_point(b"same message").unwrap();
        assert_ne!(a, b);
    }
}
