//! Lagrange basis coefficients for share recovery.
//!
//! A degree-(k-1) polynomial is determined by any k of its evaluations;
//! its constant term is the weighted sum of those evaluations with the
//! basis coefficients computed here. The ids are arbitrary distinct
//! nonzero field points, so this is the closed-form product, not an
//! FFT-domain construction.

use ark_ff::{Field, One, Zero};

use crate::arith::field::Fr;
use crate::errors::ArithError;

/// Computes the Lagrange coefficients `λ_i = Π_{j≠i} id_j / (id_j - id_i)`
/// for interpolating at zero.
///
/// For evaluations `v_i` of a polynomial at the given ids,
/// `Σ λ_i · v_i` is the polynomial's constant term. The same weights apply
/// to group-element evaluations, which is what signature recovery uses.
///
/// Ids must be nonzero and pairwise distinct; zero ids would erase the
/// numerator and duplicate ids make a denominator vanish.
pub fn coefficients_at_zero(ids: &[Fr]) -> Result<Vec<Fr>, ArithError> {
    if ids.iter().any(|id| id.is_zero()) {
        return Err(ArithError::ZeroId);
    }

    let mut coefficients = Vec::with_capacity(ids.len());
    for (i, id_i) in ids.iter().enumerate() {
        let mut numerator = Fr::one();
        let mut denominator = Fr::one();
        for (j, id_j) in ids.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= id_j;
            denominator *= *id_j - id_i;
        }
        let inv = denominator.inverse().ok_or(ArithError::DuplicateId)?;
        coefficients.push(numerator * inv);
    }
    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::field::FieldElement;
    use rand::{rngs::StdRng, SeedableRng};

    fn eval(coeffs: &[Fr], x: &Fr) -> Fr {
        coeffs
            .iter()
            .rev()
            .fold(<Fr as FieldElement>::zero(), |acc, c| acc * x + c)
    }

    #[test]
    fn recovers_constant_term() {
        let mut rng = StdRng::seed_from_u64(31);
        // Random degree-2 polynomial, three evaluation points.
        let poly: Vec<Fr> = (0..3).map(|_| Fr::random(&mut rng)).collect();
        let ids: Vec<Fr> = (1..=3).map(Fr::from_u64).collect();

        let lambdas = coefficients_at_zero(&ids).unwrap();
        let recovered: Fr = ids
            .iter()
            .zip(lambdas.iter())
            .map(|(id, l)| eval(&poly, id) * l)
            .sum();
        assert_eq!(recovered, poly[0]);
    }

    #[test]
    fn independent_of_point_order() {
        let mut rng = StdRng::seed_from_u64(32);
        let poly: Vec<Fr> = (0..3).map(|_| Fr::random(&mut rng)).collect();
        let ids: Vec<Fr> = (0..4).map(|_| Fr::random(&mut rng)).collect();
        let shuffled: Vec<Fr> = vec![ids[2], ids[0], ids[3], ids[1]];

        let sum = |points: &[Fr]| -> Fr {
            let lambdas = coefficients_at_zero(points).unwrap();
            points
                .iter()
                .zip(lambdas.iter())
                .map(|(id, l)| eval(&poly, id) * l)
                .sum()
        };
        assert_eq!(sum(&ids), sum(&shuffled));
        assert_eq!(sum(&ids), poly[0]);
    }

    #[test]
    fn rejects_zero_id() {
        let ids = [Fr::from_u64(1), <Fr as FieldElement>::zero()];
        assert_eq!(coefficients_at_zero(&ids), Err(ArithError::ZeroId));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let ids = [Fr::from_u64(2), Fr::from_u64(5), Fr::from_u64(2)];
        assert_eq!(coefficients_at_zero(&ids), Err(ArithError::DuplicateId));
    }
}
