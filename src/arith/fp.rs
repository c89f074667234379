//! Base-field arithmetic over the fixed BN254 modulus.
//!
//! Everything here operates over the coordinate field `Fq` with
//! p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47,
//! the prime the EVM pairing precompiles are defined over. The three
//! primitives ([`mod_exp`], [`inverse`], [`sqrt`]) exist to validate and
//! derive curve coordinates (see [`crate::hash_to_point`]).
//!
//! `sqrt` relies on p ≡ 3 (mod 4); [`modulus_is_3_mod_4`] must be checked
//! wherever a square root is first relied upon.

use std::ops::{Add, Mul, Sub};

use ark_ff::{BigInt, BigInteger, Field, One, PrimeField, Zero};

use crate::errors::ArithError;

/// The BN254 base (coordinate) field.
pub type Fq = ark_bn254::Fq;

/// p - 2, the Fermat inversion exponent.
const P_MINUS_2: BigInt<4> = BigInt::new([
    0x3c208c16d87cfd45,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// (p + 1) / 4, the square-root exponent for p ≡ 3 (mod 4).
const P_PLUS_1_OVER_4: BigInt<4> = BigInt::new([
    0x4f082305b61f3f52,
    0x65e05aa45a1c72a3,
    0x6e14116da0605617,
    0x0c19139cb84c680a,
]);

/// A base-field element, always held in canonical reduced form.
///
/// Construction from bytes rejects values outside [0, p); arithmetic on
/// existing values cannot leave the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp(Fq);

impl Fp {
    /// Wraps an already-reduced field value.
    pub fn new(value: Fq) -> Self {
        Fp(value)
    }

    pub fn zero() -> Self {
        Fp(Fq::zero())
    }

    pub fn one() -> Self {
        Fp(Fq::one())
    }

    pub fn from_u64(n: u64) -> Self {
        Fp(Fq::from(n))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn square(&self) -> Self {
        Fp(self.0.square())
    }

    /// Returns the underlying arkworks field value.
    pub fn into_inner(self) -> Fq {
        self.0
    }

    /// Interprets 32 big-endian bytes as an integer and reduces it mod p.
    ///
    /// Used where a uniform-ish field value is wanted from hash output;
    /// strict decoding of serialized coordinates goes through
    /// [`Fp::from_be_bytes`] instead.
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        Fp(Fq::from_be_bytes_mod_order(bytes))
    }

    /// Decodes 32 big-endian bytes, rejecting values outside [0, p).
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, ArithError> {
        fe_from_be_bytes(bytes).map(Fp)
    }

    /// Encodes as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        fe_to_be_bytes(&self.0)
    }
}

impl Add for Fp {
    type Output = Fp;

    fn add(self, rhs: Fp) -> Fp {
        Fp(self.0 + rhs.0)
    }
}

impl Sub for Fp {
    type Output = Fp;

    fn sub(self, rhs: Fp) -> Fp {
        Fp(self.0 - rhs.0)
    }
}

impl Mul for Fp {
    type Output = Fp;

    fn mul(self, rhs: Fp) -> Fp {
        Fp(self.0 * rhs.0)
    }
}

/// Raises `base` to a 256-bit exponent, most significant bit first.
///
/// The scan always runs exactly 256 iterations, so the iteration count is
/// independent of the exponent. The multiply step is still taken
/// conditionally on each exponent bit, a known timing side channel of the
/// construction; do not use this where constant-time behavior is needed.
pub fn mod_exp(base: &Fp, exponent: &BigInt<4>) -> Fp {
    let mut acc = Fq::one();
    for bit in (0..256).rev() {
        acc.square_in_place();
        if exponent.get_bit(bit) {
            acc *= base.0;
        }
    }
    Fp(acc)
}

/// Multiplicative inverse via Fermat's little theorem: `a^(p-2) mod p`.
///
/// For `a == 0` this returns 0, which is mathematically meaningless;
/// callers must reject zero input before calling.
pub fn inverse(a: &Fp) -> Fp {
    mod_exp(a, &P_MINUS_2)
}

/// Square root candidate `a^((p+1)/4) mod p` and whether it is a root.
///
/// Valid only because p ≡ 3 (mod 4). When `a` is a non-residue the
/// candidate is meaningless and `found` is false; no alternate root search
/// is performed.
pub fn sqrt(a: &Fp) -> (Fp, bool) {
    let candidate = mod_exp(a, &P_PLUS_1_OVER_4);
    let found = candidate.square() == *a;
    (candidate, found)
}

/// Whether the base-field modulus satisfies p ≡ 3 (mod 4).
///
/// [`sqrt`] is unsound without this property; anything depending on it
/// asserts this at initialization.
pub fn modulus_is_3_mod_4() -> bool {
    Fq::MODULUS.0[0] & 3 == 3
}

/// Decodes a 32-byte big-endian integer into a prime field, rejecting
/// values at or above the modulus.
pub(crate) fn fe_from_be_bytes<F>(bytes: &[u8; 32]) -> Result<F, ArithError>
where
    F: PrimeField<BigInt = BigInt<4>>,
{
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[(3 - i) * 8..(4 - i) * 8]);
        *limb = u64::from_be_bytes(buf);
    }
    F::from_bigint(BigInt::new(limbs)).ok_or(ArithError::InvalidFieldElement)
}

/// Encodes a prime-field element as 32 big-endian bytes.
pub(crate) fn fe_to_be_bytes<F>(value: &F) -> [u8; 32]
where
    F: PrimeField<BigInt = BigInt<4>>,
{
    let repr = value.into_bigint();
    let mut out = [0u8; 32];
    for (i, limb) in repr.0.iter().enumerate() {
        out[(3 - i) * 8..(4 - i) * 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}
