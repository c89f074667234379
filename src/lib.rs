//! # tsig: Threshold BLS Signatures over BN254
//!
//! A (k, n) threshold BLS signature scheme on the EVM-friendly alt_bn128
//! (BN254) curve. A dealer shares a master secret across `n` participants;
//! any `k` of them can jointly produce the master signature on a message,
//! and the result verifies under the single master public key exactly as
//! if the dealer had signed directly. Signatures live in G1 (64 bytes),
//! public keys in G2 (128 bytes), matching the EVM pairing precompiles
//! so recovered signatures can be checked on-chain.
//!
//! ## Architecture
//!
//! - **[`arith`]**: field and curve arithmetic. The scalar field `Fr`,
//!   fixed-exponent base-field routines ([`arith::fp`]), G1/G2 group
//!   operations behind the [`CurvePoint`] trait, the [`PairingBackend`]
//!   abstraction with its BN254 instantiation, and Lagrange interpolation.
//!
//! - **[`tsig`]**: the protocol layer. The [`ThresholdSignature`] trait
//!   and [`BlsThresholdScheme`] implementation, plus the key material
//!   types ([`KeyShare`], [`PublicShare`], [`PartialSignature`]).
//!
//! - **[`hash_to_point`]**: domain-separated message-to-G1 mapping behind
//!   the [`HashToPoint`] trait, with keccak256 [`TryAndIncrement`] as the
//!   EVM-compatible default.
//!
//! - **[`encoding`]**: fixed-width big-endian byte and hex codecs for
//!   scalars and points, in the layout the EVM precompiles consume.
//!
//! - **[`config`]** and **[`errors`]**: parameter validation and the
//!   error types.
//!
//! ## Quick Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tsig::{EvmThresholdScheme, ThresholdParameters, ThresholdSignature};
//!
//! # fn main() -> Result<(), tsig::Error> {
//! // 3-of-5 signing with the EVM domain tag
//! let scheme = EvmThresholdScheme::with_domain("testing evmbls");
//! let params = ThresholdParameters::new(5, 3)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let keys = scheme.keygen(&mut rng, &params)?;
//!
//! // Any three participants sign independently
//! let msg = b"hello world";
//! let partials: Vec<_> = keys.secret_shares[..3]
//!     .iter()
//!     .map(|share| scheme.partial_sign(share, msg))
//!     .collect::<Result<_, _>>()?;
//!
//! // Recover and verify the master signature
//! let signature = scheme.aggregate(params.threshold, &partials)?;
//! assert!(scheme.verify(&keys.public_key, msg, &signature)?);
//! # Ok(())
//! # }
//! ```

pub mod arith;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod hash_to_point;
pub mod serde_impl;
pub mod tsig;

pub use arith::field::{FieldElement, Fr};
pub use arith::fp::Fp;
pub use arith::group::{CurvePoint, G1, G2};
pub use arith::pairing::{Gt, PairingBackend, PairingEngine, TargetGroup};
pub use config::ThresholdParameters;
pub use errors::{ArithError, Error};
pub use hash_to_point::{HashToPoint, TryAndIncrement};
pub use tsig::{
    BlsThresholdScheme, EvmThresholdScheme, KeyMaterial, KeyShare, PartialSignature, PublicShare,
    ThresholdSignature,
};
