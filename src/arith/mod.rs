//! Field and curve arithmetic for the scheme.
//!
//! The module is split by concern:
//!
//! - **[`field`]**: the BN254 scalar field `Fr` (share values, participant
//!   ids, Lagrange coefficients)
//! - **[`fp`]**: fixed-modulus arithmetic over the BN254 base field
//!   (exponentiation, inversion, square roots used by point mapping)
//! - **[`group`]**: elliptic curve point operations on G1 and G2
//! - **[`pairing`]**: the bilinear pairing backend used for verification
//! - **[`lagrange`]**: Lagrange basis coefficients for share recovery

pub mod field;
pub use field::*;

pub mod fp;
pub use fp::*;

pub mod group;
pub use group::*;

pub mod pairing;
pub use pairing::*;

pub mod lagrange;
