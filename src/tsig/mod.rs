//! (k, n) threshold BLS signatures.
//!
//! A trusted dealer shares a master secret across `n` participants so that
//! any `k` of them can jointly produce the master BLS signature on a
//! message, while fewer than `k` learn nothing about it. The recovered
//! signature is indistinguishable from one produced with the master secret
//! directly, so verifiers never learn which quorum signed.
//!
//! The flow is [`ThresholdSignature::keygen`] once per session, then per
//! message: each participant runs [`ThresholdSignature::partial_sign`],
//! the aggregator optionally screens the results with
//! [`ThresholdSignature::verify_partial`], combines a quorum with
//! [`ThresholdSignature::aggregate`] and anyone checks the output with
//! [`ThresholdSignature::verify`].

pub mod keys;
pub mod scheme;

pub use keys::{KeyMaterial, KeyShare, PartialSignature, PublicShare};
pub use scheme::{BlsThresholdScheme, EvmThresholdScheme};

use rand_core::{CryptoRng, RngCore};

use crate::arith::pairing::PairingBackend;
use crate::config::ThresholdParameters;
use crate::errors::Error;

/// The threshold signature scheme API.
///
/// All partial signatures fed to [`aggregate`](Self::aggregate) must cover
/// the same message; the aggregator enforces that by screening each one
/// with [`verify_partial`](Self::verify_partial) first, since the partials
/// themselves carry no message.
pub trait ThresholdSignature<B: PairingBackend> {
    /// Deals key material for `params.parties` participants with
    /// reconstruction threshold `params.threshold`.
    fn keygen<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        params: &ThresholdParameters,
    ) -> Result<KeyMaterial<B>, Error>;

    /// Signs a message with a single key share.
    fn partial_sign(
        &self,
        share: &KeyShare<B>,
        msg: &[u8],
    ) -> Result<PartialSignature<B>, Error>;

    /// Checks one partial signature against the signer's public share.
    fn verify_partial(
        &self,
        share: &PublicShare<B>,
        msg: &[u8],
        partial: &PartialSignature<B>,
    ) -> Result<bool, Error>;

    /// Recovers the master signature from at least `threshold` partials.
    ///
    /// Uses every supplied partial, not just the first `threshold`; extra
    /// valid partials change the interpolation weights but not the result.
    fn aggregate(
        &self,
        threshold: usize,
        partials: &[PartialSignature<B>],
    ) -> Result<B::G1, Error>;

    /// Verifies an aggregate signature under the master public key.
    fn verify(&self, public_key: &B::G2, msg: &[u8], signature: &B::G1)
        -> Result<bool, Error>;
}
