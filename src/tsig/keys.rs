//! Key material for threshold signing.

use crate::arith::pairing::PairingBackend;

/// One participant's secret key share.
///
/// The pair (id, secret) is the share polynomial evaluated at `id`.
/// Exclusively owned by its participant and never mutated after dealing;
/// signing with it is a pure function, so independent holders may sign
/// concurrently without coordination.
#[derive(Debug)]
pub struct KeyShare<B: PairingBackend> {
    /// Nonzero participant id, unique within one sharing session.
    pub id: B::Scalar,
    /// The share scalar.
    pub secret: B::Scalar,
}

/// Public counterpart of one share: `g2 * secret`.
///
/// Lets an aggregator check a partial signature against the message before
/// recovery, instead of discovering a mismatch through a failed aggregate
/// verification.
#[derive(Debug)]
pub struct PublicShare<B: PairingBackend> {
    pub id: B::Scalar,
    pub key: B::G2,
}

/// A partial signature: one share's signature on a message, tagged with
/// the signer's id for interpolation.
#[derive(Debug)]
pub struct PartialSignature<B: PairingBackend> {
    pub id: B::Scalar,
    pub point: B::G1,
}

/// Everything a trusted dealer hands out for one sharing session.
///
/// The dealer sees the master secret while dealing; distributing key
/// generation itself (DKG) is out of scope here. The coefficient
/// polynomial only exists inside `keygen` and is dropped before this
/// struct is returned.
#[derive(Debug)]
pub struct KeyMaterial<B: PairingBackend> {
    /// Master public key `g2 * secret`; the only key later signatures
    /// verify under.
    pub public_key: B::G2,
    /// Per-participant public shares, for partial verification.
    pub public_shares: Vec<PublicShare<B>>,
    /// Per-participant secret shares, to be distributed and then
    /// forgotten by the dealer.
    pub secret_shares: Vec<KeyShare<B>>,
}

impl<B: PairingBackend> Clone for KeyShare<B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            secret: self.secret,
        }
    }
}

impl<B: PairingBackend> PartialEq for KeyShare<B> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.secret == other.secret
    }
}

impl<B: PairingBackend> Clone for PublicShare<B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            key: self.key,
        }
    }
}

impl<B: PairingBackend> PartialEq for PublicShare<B> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.key == other.key
    }
}

impl<B: PairingBackend> Clone for PartialSignature<B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            point: self.point,
        }
    }
}

impl<B: PairingBackend> PartialEq for PartialSignature<B> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.point == other.point
    }
}

impl<B: PairingBackend> Clone for KeyMaterial<B> {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key,
            public_shares: self.public_shares.clone(),
            secret_shares: self.secret_shares.clone(),
        }
    }
}
