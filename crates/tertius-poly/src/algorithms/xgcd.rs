//! Extended polynomial GCD.
//!
//! Computes `(g, s, t)` with `s*a + t*b = g` and `g` monic. Long inputs
//! are reduced by repeated half-GCD calls; only the cofactor of `a` is
//! carried through the loop, and the cofactor of `b` is recovered at the
//! end with a single exact division.

use std::mem;

use tertius_nmod::Modulus;

use super::field_ops::{
    add_assign_vec, div_exact_vec, divrem_vec, mul_vec, neg_vec, scalar_mul_assign, sub_assign_vec,
    sub_vec,
};
use super::gcd::ordered;
use super::hgcd::hgcd;
use crate::config::GcdConfig;
use crate::dense::NmodPoly;
use crate::error::PolyError;

/// Coefficient vectors of `(g, s, t)`.
type Bezout = (Vec<u64>, Vec<u64>, Vec<u64>);

/// Extended Euclid, not made monic.
///
/// Requires `len(a) >= len(b) > 0`.
pub(crate) fn xgcd_euclidean(a: &[u64], b: &[u64], modulus: &Modulus) -> Result<Bezout, PolyError> {
    debug_assert!(a.len() >= b.len() && !b.is_empty());

    let mut old_r = a.to_vec();
    let mut r = b.to_vec();
    let mut old_s = vec![1];
    let mut s = Vec::new();
    let mut old_t = Vec::new();
    let mut t = vec![1];
    let (mut q, mut rem, mut tmp) = (Vec::new(), Vec::new(), Vec::new());

    while !r.is_empty() {
        divrem_vec(&mut q, &mut rem, &old_r, &r, modulus)?;
        mem::swap(&mut old_r, &mut r);
        mem::swap(&mut r, &mut rem);

        // (old_s, s) = (s, old_s - q*s)
        mul_vec(&mut tmp, &q, &s, modulus);
        sub_assign_vec(&mut old_s, &tmp, modulus);
        mem::swap(&mut old_s, &mut s);

        mul_vec(&mut tmp, &q, &t, modulus);
        sub_assign_vec(&mut old_t, &tmp, modulus);
        mem::swap(&mut old_t, &mut t);
    }

    Ok((old_r, old_s, old_t))
}

/// Half-GCD driven extended GCD, not made monic.
///
/// Requires `len(a) >= len(b) > 0`, both normalised.
pub(crate) fn xgcd_hgcd(
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
    config: &GcdConfig,
) -> Result<Bezout, PolyError> {
    debug_assert!(a.len() >= b.len() && !b.is_empty());
    let cutoff = config.euclidean_cutoff(modulus);

    let (mut q, mut r) = (Vec::new(), Vec::new());
    divrem_vec(&mut q, &mut r, a, b, modulus)?;
    if r.is_empty() {
        return Ok((b.to_vec(), Vec::new(), vec![1]));
    }

    // h and j are the current remainder pair; s and t their cofactors of a
    let mut mat: [Vec<u64>; 4] = Default::default();
    let (mut h, mut j) = (Vec::new(), Vec::new());
    let sign = hgcd(Some(&mut mat), &mut h, &mut j, b, &r, modulus, config)?;

    let (mut s, mut t) = (Vec::new(), Vec::new());
    if sign > 0 {
        neg_vec(&mut s, &mat[1], modulus);
        t.clone_from(&mat[0]);
    } else {
        s.clone_from(&mat[1]);
        neg_vec(&mut t, &mat[0], modulus);
    }

    let (mut u, mut v, mut w, mut x, mut tmp) =
        (Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new());
    let g = loop {
        if j.is_empty() {
            break h;
        }
        tracing::trace!(len = j.len(), "xgcd round");

        divrem_vec(&mut q, &mut r, &h, &j, modulus)?;
        mul_vec(&mut v, &q, &t, modulus);
        mem::swap(&mut s, &mut t);
        sub_assign_vec(&mut t, &v, modulus);
        if r.is_empty() {
            break j;
        }

        if j.len() < cutoff {
            tracing::trace!(len = j.len(), "xgcd: euclidean tail");
            let (g, u0, u1) = xgcd_euclidean(&j, &r, modulus)?;
            mul_vec(&mut v, &u0, &s, modulus);
            mul_vec(&mut w, &u1, &t, modulus);
            add_assign_vec(&mut v, &w, modulus);
            mem::swap(&mut s, &mut v);
            break g;
        }

        let sign = hgcd(Some(&mut mat), &mut h, &mut tmp, &j, &r, modulus, config)?;
        mem::swap(&mut j, &mut tmp);

        // (s, t) = sign·(R3·s - R1·t, R0·t - R2·s)
        mul_vec(&mut u, &mat[3], &s, modulus);
        mul_vec(&mut v, &mat[1], &t, modulus);
        mul_vec(&mut w, &mat[0], &t, modulus);
        mul_vec(&mut x, &mat[2], &s, modulus);
        if sign > 0 {
            sub_vec(&mut s, &u, &v, modulus);
            sub_vec(&mut t, &w, &x, modulus);
        } else {
            sub_vec(&mut s, &v, &u, modulus);
            sub_vec(&mut t, &x, &w, modulus);
        }
    };

    // t = (g - s*a) / b
    mul_vec(&mut u, &s, a, modulus);
    sub_vec(&mut v, &g, &u, modulus);
    div_exact_vec(&mut t, &v, b, modulus)?;

    Ok((g, s, t))
}

/// Extended GCD of coefficient vectors with `len(a) >= len(b)`, monic.
fn xgcd_ordered(
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
    config: &GcdConfig,
) -> Result<Bezout, PolyError> {
    let Some(&lead) = a.last() else {
        return Ok((Vec::new(), Vec::new(), Vec::new()));
    };

    match b {
        [] => {
            let inv = modulus.inv(lead)?;
            let mut g = a.to_vec();
            scalar_mul_assign(&mut g, inv, modulus);
            Ok((g, vec![inv], Vec::new()))
        }
        [c] => Ok((vec![1], Vec::new(), vec![modulus.inv(*c)?])),
        _ => {
            let (mut g, mut s, mut t) = if a.len() < config.xgcd_cutoff {
                xgcd_euclidean(a, b, modulus)?
            } else {
                xgcd_hgcd(a, b, modulus, config)?
            };
            if let Some(&lead) = g.last() {
                let inv = modulus.inv(lead)?;
                for v in [&mut g, &mut s, &mut t] {
                    scalar_mul_assign(v, inv, modulus);
                }
            }
            Ok((g, s, t))
        }
    }
}

/// Computes the extended GCD with the default thresholds.
///
/// Returns `(g, s, t)` with `s*a + t*b = g` and `g` monic. When both
/// inputs are zero all three are zero.
///
/// # Errors
///
/// Fails if the operands have different moduli, or if a composite
/// modulus makes a leading coefficient non-invertible. A modulus for
/// which [`Modulus::is_prime`] holds never fails the second way.
///
/// # Examples
///
/// ```
/// use tertius_nmod::Modulus;
/// use tertius_poly::{poly_xgcd, NmodPoly};
///
/// let p = Modulus::new(10_007).unwrap();
/// assert!(p.is_prime());
///
/// let f = NmodPoly::monomial(1, 2, p);
/// let g = NmodPoly::from_signed(&[-32, 24], p);
/// let (d, s, t) = poly_xgcd(&f, &g).unwrap();
/// assert!(d.is_one());
/// assert_eq!(s.mul(&f).add(&t.mul(&g)), d);
/// ```
pub fn poly_xgcd(a: &NmodPoly, b: &NmodPoly) -> Result<(NmodPoly, NmodPoly, NmodPoly), PolyError> {
    poly_xgcd_with_config(a, b, &GcdConfig::default())
}

/// Computes the extended GCD, switching to the half-GCD algorithm from
/// `config.xgcd_cutoff` coefficients on.
///
/// # Errors
///
/// As for [`poly_xgcd`].
pub fn poly_xgcd_with_config(
    a: &NmodPoly,
    b: &NmodPoly,
    config: &GcdConfig,
) -> Result<(NmodPoly, NmodPoly, NmodPoly), PolyError> {
    let (long, short, swapped) = ordered(a, b)?;
    let modulus = *a.modulus();

    let (g, s, t) = xgcd_ordered(long.coeffs(), short.coeffs(), &modulus, config)?;
    let (s, t) = if swapped { (t, s) } else { (s, t) };

    Ok((
        NmodPoly::from_reduced(g, modulus),
        NmodPoly::from_reduced(s, modulus),
        NmodPoly::from_reduced(t, modulus),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{random_nmod, rng};

    fn p() -> Modulus {
        Modulus::new(10_007).unwrap()
    }

    fn tiny() -> GcdConfig {
        GcdConfig {
            hgcd_cutoff: 2,
            gcd_cutoff: 2,
            small_gcd_cutoff: 2,
            xgcd_cutoff: 2,
            strassen_cutoff: 3,
            ..GcdConfig::default()
        }
    }

    fn check_bezout(a: &NmodPoly, b: &NmodPoly, config: &GcdConfig) -> NmodPoly {
        let (g, s, t) = poly_xgcd_with_config(a, b, config).unwrap();
        assert_eq!(s.mul(a).add(&t.mul(b)), g, "s*a + t*b != g");
        if !g.is_zero() {
            assert_eq!(g.leading_coeff(), Some(1));
            assert!(a.rem(&g).unwrap().is_zero());
            assert!(b.rem(&g).unwrap().is_zero());
        }
        g
    }

    #[test]
    fn test_xgcd_example() {
        let m = p();
        let f = NmodPoly::monomial(1, 2, m);
        let g = NmodPoly::from_signed(&[-32, 24], m);
        for config in [GcdConfig::default(), tiny()] {
            assert!(check_bezout(&f, &g, &config).is_one());
            assert!(check_bezout(&g, &f, &config).is_one());
        }
    }

    #[test]
    fn test_xgcd_common_factor() {
        let m = p();
        // gcd(x^2 - 1, x^2 + x) = x + 1
        let a = NmodPoly::from_signed(&[-1, 0, 1], m);
        let b = NmodPoly::from_signed(&[0, 1, 1], m);
        let g = check_bezout(&a, &b, &tiny());
        assert_eq!(g, NmodPoly::new(vec![1, 1], m));
    }

    #[test]
    fn test_xgcd_degenerate() {
        let m = p();
        let zero = NmodPoly::zero(m);
        let a = NmodPoly::new(vec![3, 0, 6], m);
        let c = NmodPoly::constant(5, m);

        let (g, s, t) = poly_xgcd(&zero, &zero).unwrap();
        assert!(g.is_zero() && s.is_zero() && t.is_zero());

        let (g, s, t) = poly_xgcd(&a, &zero).unwrap();
        assert_eq!(g, a.make_monic().unwrap());
        assert_eq!(s, NmodPoly::constant(m.inv(6).unwrap(), m));
        assert!(t.is_zero());

        let (g, s, t) = poly_xgcd(&zero, &a).unwrap();
        assert_eq!(g, a.make_monic().unwrap());
        assert!(s.is_zero());
        assert_eq!(t, NmodPoly::constant(m.inv(6).unwrap(), m));

        let (g, s, t) = poly_xgcd(&a, &c).unwrap();
        assert!(g.is_one() && s.is_zero());
        assert_eq!(t, NmodPoly::constant(m.inv(5).unwrap(), m));

        check_bezout(&c, &c, &tiny());
    }

    #[test]
    fn test_xgcd_random() {
        let m = p();
        let mut r = rng(77);
        for config in [GcdConfig::default(), tiny()] {
            for (la, lb, lc) in [(30, 29, 1), (60, 20, 8), (150, 150, 40), (400, 390, 100)] {
                let c = random_nmod(&mut r, lc, m);
                let a = random_nmod(&mut r, la, m).mul(&c);
                let b = random_nmod(&mut r, lb, m).mul(&c);
                let g = check_bezout(&a, &b, &config);
                assert!(g.rem(&c).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn test_hgcd_and_euclidean_agree() {
        let m = p();
        let mut r = rng(5);
        let a = random_nmod(&mut r, 90, m).coeffs().to_vec();
        let b = random_nmod(&mut r, 70, m).coeffs().to_vec();

        let (g1, s1, t1) = xgcd_euclidean(&a, &b, &m).unwrap();
        let (g2, s2, t2) = xgcd_hgcd(&a, &b, &m, &tiny()).unwrap();

        // Both gcds are associates; compare after scaling to monic
        let lift = |g: Vec<u64>| NmodPoly::from_reduced(g, m).make_monic().unwrap();
        assert_eq!(lift(g1.clone()), lift(g2.clone()));

        let a_p = NmodPoly::from_reduced(a, m);
        let b_p = NmodPoly::from_reduced(b, m);
        for (g, s, t) in [(g1, s1, t1), (g2, s2, t2)] {
            let lhs = NmodPoly::from_reduced(s, m)
                .mul(&a_p)
                .add(&NmodPoly::from_reduced(t, m).mul(&b_p));
            assert_eq!(lhs, NmodPoly::from_reduced(g, m));
        }
    }

    #[test]
    fn test_composite_modulus() {
        let m = Modulus::new(4).unwrap();
        assert!(!m.is_prime());

        // x^3 divided by 2x^2 + 1 needs the inverse of 2 mod 4
        let a = NmodPoly::new(vec![0, 0, 0, 1], m);
        let b = NmodPoly::new(vec![1, 0, 2], m);
        let expected = PolyError::Modulus(tertius_nmod::ModulusError::NotInvertible {
            value: 2,
            modulus: 4,
        });
        for config in [GcdConfig::default(), tiny()] {
            assert_eq!(poly_xgcd_with_config(&a, &b, &config), Err(expected.clone()));
        }

        // Units as leading coefficients still work
        let c = NmodPoly::new(vec![1, 1], m);
        check_bezout(&c.mul(&c), &c, &GcdConfig::default());
    }

    #[test]
    fn test_small_modulus_tail() {
        let m = Modulus::new(251).unwrap();
        let mut r = rng(9);
        let config = GcdConfig {
            xgcd_cutoff: 10,
            ..GcdConfig::default()
        };
        let a = random_nmod(&mut r, 500, m);
        let b = random_nmod(&mut r, 499, m);
        check_bezout(&a, &b, &config);
    }
}
