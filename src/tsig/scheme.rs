//! BLS threshold scheme over a generic pairing backend.

use std::marker::PhantomData;

use ark_ff::Zero;
use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::arith::field::{FieldElement, Fr};
use crate::arith::group::CurvePoint;
use crate::arith::lagrange;
use crate::arith::pairing::{PairingBackend, PairingEngine, TargetGroup};
use crate::config::ThresholdParameters;
use crate::errors::Error;
use crate::hash_to_point::{HashToPoint, TryAndIncrement};
use crate::tsig::keys::{KeyMaterial, KeyShare, PartialSignature, PublicShare};
use crate::tsig::ThresholdSignature;

/// Threshold BLS over backend `B`, with messages mapped to G1 by `H`.
///
/// The hasher is fixed at construction; every signer and verifier in one
/// deployment must hold an identically configured instance.
#[derive(Clone, Debug)]
pub struct BlsThresholdScheme<B, H> {
    hasher: H,
    _backend: PhantomData<B>,
}

/// The concrete scheme this crate ships: BN254 with keccak256
/// try-and-increment hashing, matching the EVM verifier contracts.
pub type EvmThresholdScheme = BlsThresholdScheme<PairingEngine, TryAndIncrement>;

impl<B, H> BlsThresholdScheme<B, H>
where
    B: PairingBackend<Scalar = Fr>,
    H: HashToPoint<B>,
{
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            _backend: PhantomData,
        }
    }
}

impl EvmThresholdScheme {
    /// Convenience constructor from a domain-separation string.
    pub fn with_domain(domain: impl AsRef<[u8]>) -> Self {
        Self::new(TryAndIncrement::new(domain))
    }
}

/// Horner evaluation of the share polynomial at `at`.
fn evaluate_polynomial(coefficients: &[Fr], at: &Fr) -> Fr {
    coefficients
        .iter()
        .rev()
        .fold(<Fr as FieldElement>::zero(), |acc, c| acc * at + c)
}

impl<B, H> ThresholdSignature<B> for BlsThresholdScheme<B, H>
where
    B: PairingBackend<Scalar = Fr>,
    H: HashToPoint<B>,
{
    #[instrument(level = "info", skip_all, fields(parties = params.parties, threshold = params.threshold))]
    fn keygen<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        params: &ThresholdParameters,
    ) -> Result<KeyMaterial<B>, Error> {
        params.validate()?;

        // Degree k-1 polynomial; the constant term is the master secret.
        let coefficients: Vec<Fr> = (0..params.threshold).map(|_| Fr::random(rng)).collect();

        // Ids must be nonzero (id 0 would evaluate to the master secret)
        // and distinct (duplicates break interpolation). Collisions among
        // uniform Fr draws are a ~2^-254 event, so the redraw loop is all
        // but dead code, but it keeps the invariant unconditional.
        let mut ids: Vec<Fr> = Vec::with_capacity(params.parties);
        for _ in 0..params.parties {
            let id = loop {
                let candidate = Fr::random(rng);
                if !candidate.is_zero() && !ids.contains(&candidate) {
                    break candidate;
                }
            };
            ids.push(id);
        }

        let g2 = B::G2::generator();
        let mut secret_shares = Vec::with_capacity(params.parties);
        let mut public_shares = Vec::with_capacity(params.parties);
        for id in &ids {
            let secret = evaluate_polynomial(&coefficients, id);
            public_shares.push(PublicShare {
                id: *id,
                key: g2.mul_scalar(&secret),
            });
            secret_shares.push(KeyShare { id: *id, secret });
        }

        Ok(KeyMaterial {
            public_key: g2.mul_scalar(&coefficients[0]),
            public_shares,
            secret_shares,
        })
    }

    #[instrument(level = "trace", skip_all, fields(msg_len = msg.len()))]
    fn partial_sign(
        &self,
        share: &KeyShare<B>,
        msg: &[u8],
    ) -> Result<PartialSignature<B>, Error> {
        let point = self.hasher.hash_to_point(msg)?.mul_scalar(&share.secret);
        Ok(PartialSignature {
            id: share.id,
            point,
        })
    }

    #[instrument(level = "trace", skip_all)]
    fn verify_partial(
        &self,
        share: &PublicShare<B>,
        msg: &[u8],
        partial: &PartialSignature<B>,
    ) -> Result<bool, Error> {
        if partial.id != share.id {
            return Ok(false);
        }
        let hashed = self.hasher.hash_to_point(msg)?;
        // e(partial, -g2) * e(H(m), share_pk) == 1
        let out = B::multi_pairing(
            &[partial.point, hashed],
            &[B::G2::generator().negate(), share.key],
        )?;
        Ok(out == B::Target::identity())
    }

    #[instrument(level = "info", skip_all, fields(required = threshold, provided = partials.len()))]
    fn aggregate(
        &self,
        threshold: usize,
        partials: &[PartialSignature<B>],
    ) -> Result<B::G1, Error> {
        if partials.len() < threshold {
            return Err(Error::InsufficientShares {
                required: threshold,
                provided: partials.len(),
            });
        }
        let ids: Vec<Fr> = partials.iter().map(|p| p.id).collect();
        let lambdas = lagrange::coefficients_at_zero(&ids)?;
        let points: Vec<B::G1> = partials.iter().map(|p| p.point).collect();
        Ok(B::G1::msm(&points, &lambdas)?)
    }

    #[instrument(level = "debug", skip_all, fields(msg_len = msg.len()))]
    fn verify(
        &self,
        public_key: &B::G2,
        msg: &[u8],
        signature: &B::G1,
    ) -> Result<bool, Error> {
        let hashed = self.hasher.hash_to_point(msg)?;
        // e(sig, -g2) * e(H(m), pk) == 1  <=>  e(sig, g2) == e(H(m), pk)
        let out = B::multi_pairing(
            &[*signature, hashed],
            &[B::G2::generator().negate(), *public_key],
        )?;
        Ok(out == B::Target::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::group::G1;
    use crate::encoding::g1_to_hex;
    use crate::errors::ArithError;
    use rand::{rngs::StdRng, SeedableRng};

    const MSG: &[u8] = b"hello world";

    fn scheme() -> EvmThresholdScheme {
        EvmThresholdScheme::with_domain("testing evmbls")
    }

    fn setup(parties: usize, threshold: usize, seed: u64) -> KeyMaterial<PairingEngine> {
        let mut rng = StdRng::seed_from_u64(seed);
        let params = ThresholdParameters::new(parties, threshold).unwrap();
        scheme().keygen(&mut rng, &params).unwrap()
    }

    fn partials_for(
        keys: &KeyMaterial<PairingEngine>,
        indices: &[usize],
        msg: &[u8],
    ) -> Vec<PartialSignature<PairingEngine>> {
        indices
            .iter()
            .map(|&i| scheme().partial_sign(&keys.secret_shares[i], msg).unwrap())
            .collect()
    }

    #[test]
    fn end_to_end_3_of_5() {
        let s = scheme();
        let keys = setup(5, 3, 100);

        let partials = partials_for(&keys, &[0, 1, 2], MSG);
        for (partial, share) in partials.iter().zip(keys.public_shares.iter()) {
            assert!(s.verify_partial(share, MSG, partial).unwrap());
        }

        let signature = s.aggregate(3, &partials).unwrap();
        assert!(s.verify(&keys.public_key, MSG, &signature).unwrap());
    }

    #[test]
    fn recovery_is_subset_independent() {
        let s = scheme();
        let keys = setup(5, 3, 101);

        let first = s.aggregate(3, &partials_for(&keys, &[0, 1, 2], MSG)).unwrap();
        let second = s.aggregate(3, &partials_for(&keys, &[1, 3, 4], MSG)).unwrap();
        assert_eq!(first, second);
        assert_eq!(g1_to_hex(&first), g1_to_hex(&second));
        assert!(s.verify(&keys.public_key, MSG, &first).unwrap());
    }

    #[test]
    fn oversized_quorum_matches_minimal_one() {
        let s = scheme();
        let keys = setup(5, 3, 102);

        let minimal = s.aggregate(3, &partials_for(&keys, &[2, 3, 4], MSG)).unwrap();
        let all = s
            .aggregate(3, &partials_for(&keys, &[0, 1, 2, 3, 4], MSG))
            .unwrap();
        assert_eq!(minimal, all);
    }

    #[test]
    fn single_share_threshold_degenerates_to_plain_bls() {
        let s = scheme();
        // k = 1: every share equals the master secret.
        let keys = setup(3, 1, 103);

        let from_first = s.aggregate(1, &partials_for(&keys, &[0], MSG)).unwrap();
        let from_last = s.aggregate(1, &partials_for(&keys, &[2], MSG)).unwrap();
        assert_eq!(from_first, from_last);
        assert!(s.verify(&keys.public_key, MSG, &from_first).unwrap());
    }

    #[test]
    fn rejects_sub_threshold_quorum() {
        let s = scheme();
        let keys = setup(5, 3, 104);

        let err = s
            .aggregate(3, &partials_for(&keys, &[0, 1], MSG))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientShares {
                required: 3,
                provided: 2
            }
        ));
    }

    #[test]
    fn rejects_duplicate_signer() {
        let s = scheme();
        let keys = setup(5, 3, 105);

        let err = s
            .aggregate(3, &partials_for(&keys, &[0, 1, 1], MSG))
            .unwrap_err();
        assert!(matches!(err, Error::Arith(ArithError::DuplicateId)));
    }

    #[test]
    fn signature_binds_to_message() {
        let s = scheme();
        let keys = setup(5, 3, 106);

        let signature = s.aggregate(3, &partials_for(&keys, &[0, 1, 2], MSG)).unwrap();
        assert!(s.verify(&keys.public_key, MSG, &signature).unwrap());
        assert!(!s.verify(&keys.public_key, b"other message", &signature).unwrap());
    }

    #[test]
    fn corrupted_partial_is_caught() {
        let s = scheme();
        let keys = setup(5, 3, 107);

        let mut partials = partials_for(&keys, &[0, 1, 2], MSG);
        // Shift one partial off its share; still a valid curve point, so
        // only the pairing checks can notice.
        partials[1].point = partials[1].point.add(&G1::generator());

        assert!(!s
            .verify_partial(&keys.public_shares[1], MSG, &partials[1])
            .unwrap());

        // An aggregator that skips screening still fails at the end.
        let signature = s.aggregate(3, &partials).unwrap();
        assert!(!s.verify(&keys.public_key, MSG, &signature).unwrap());
    }

    #[test]
    fn partial_over_wrong_message_is_caught() {
        let s = scheme();
        let keys = setup(5, 3, 108);

        let stray = s
            .partial_sign(&keys.secret_shares[0], b"stale message")
            .unwrap();
        assert!(!s
            .verify_partial(&keys.public_shares[0], MSG, &stray)
            .unwrap());
    }

    #[test]
    fn partial_with_mismatched_id_is_rejected() {
        let s = scheme();
        let keys = setup(5, 3, 109);

        let partial = partials_for(&keys, &[0], MSG).remove(0);
        assert!(!s
            .verify_partial(&keys.public_shares[1], MSG, &partial)
            .unwrap());
    }

    #[test]
    fn keygen_ids_are_nonzero_and_distinct() {
        let keys = setup(40, 2, 110);

        assert_eq!(keys.secret_shares.len(), 40);
        assert_eq!(keys.public_shares.len(), 40);
        for (i, share) in keys.secret_shares.iter().enumerate() {
            assert!(!share.id.is_zero());
            assert_eq!(share.id, keys.public_shares[i].id);
            for other in &keys.secret_shares[..i] {
                assert_ne!(share.id, other.id);
            }
        }
    }

    #[test]
    fn keygen_rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(111);
        let params = ThresholdParameters {
            parties: 2,
            threshold: 3,
        };
        assert!(matches!(
            scheme().keygen(&mut rng, &params),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn public_shares_match_secret_shares() {
        let keys = setup(4, 2, 112);
        let g2 = <PairingEngine as PairingBackend>::G2::generator();
        for (secret, public) in keys.secret_shares.iter().zip(keys.public_shares.iter()) {
            assert_eq!(g2.mul_scalar(&secret.secret), public.key);
        }
    }
}
