//! Polynomial GCD algorithms.
//!
//! This module provides the greatest common divisor of polynomials over
//! `Z/nZ`: the quadratic Euclidean algorithm for short inputs, and a
//! half-GCD driven loop that reaches quasi-linear cost for long ones.

use std::mem;

use tertius_nmod::Modulus;

use super::field_ops::{div_exact_vec, divrem_vec, make_monic_vec, mul_vec};
use super::hgcd::hgcd;
use crate::config::GcdConfig;
use crate::dense::NmodPoly;
use crate::error::PolyError;

/// Euclidean GCD of coefficient vectors, not made monic.
pub(crate) fn gcd_euclidean(a: &[u64], b: &[u64], modulus: &Modulus) -> Result<Vec<u64>, PolyError> {
    let mut p = a.to_vec();
    let mut q = b.to_vec();
    let (mut quot, mut r) = (Vec::new(), Vec::new());

    while !q.is_empty() {
        divrem_vec(&mut quot, &mut r, &p, &q, modulus)?;
        mem::swap(&mut p, &mut q);
        mem::swap(&mut q, &mut r);
    }

    Ok(p)
}

/// Half-GCD driven GCD, not made monic.
///
/// Requires `len(a) >= len(b) > 0`, both normalised.
pub(crate) fn gcd_hgcd(
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
    config: &GcdConfig,
) -> Result<Vec<u64>, PolyError> {
    debug_assert!(a.len() >= b.len() && !b.is_empty());
    let cutoff = config.euclidean_cutoff(modulus);

    let (mut q, mut r) = (Vec::new(), Vec::new());
    divrem_vec(&mut q, &mut r, a, b, modulus)?;
    if r.is_empty() {
        return Ok(b.to_vec());
    }

    let (mut g, mut j, mut tmp) = (Vec::new(), Vec::new(), Vec::new());
    hgcd(None, &mut g, &mut j, b, &r, modulus, config)?;

    while !j.is_empty() {
        tracing::trace!(len = j.len(), "gcd round");
        divrem_vec(&mut q, &mut r, &g, &j, modulus)?;
        if r.is_empty() {
            mem::swap(&mut g, &mut j);
            break;
        }
        if j.len() < cutoff {
            tracing::trace!(len = j.len(), "gcd: euclidean tail");
            g = gcd_euclidean(&j, &r, modulus)?;
            break;
        }
        hgcd(None, &mut g, &mut tmp, &j, &r, modulus, config)?;
        mem::swap(&mut j, &mut tmp);
    }

    Ok(g)
}

/// Returns `(a, b)` ordered so that `a` is at least as long as `b`,
/// after checking that they share a modulus.
pub(crate) fn ordered<'p>(
    a: &'p NmodPoly,
    b: &'p NmodPoly,
) -> Result<(&'p NmodPoly, &'p NmodPoly, bool), PolyError> {
    if a.modulus() != b.modulus() {
        return Err(PolyError::ModulusMismatch(
            a.modulus().modulus(),
            b.modulus().modulus(),
        ));
    }
    if a.len() < b.len() {
        Ok((b, a, true))
    } else {
        Ok((a, b, false))
    }
}

fn finish(mut g: Vec<u64>, modulus: Modulus) -> Result<NmodPoly, PolyError> {
    make_monic_vec(&mut g, &modulus)?;
    Ok(NmodPoly::from_reduced(g, modulus))
}

/// Computes the monic GCD with the default thresholds.
///
/// `gcd(0, 0)` is zero.
///
/// # Errors
///
/// Fails if the operands have different moduli, or if a composite
/// modulus makes a leading coefficient non-invertible.
pub fn poly_gcd(a: &NmodPoly, b: &NmodPoly) -> Result<NmodPoly, PolyError> {
    poly_gcd_with_config(a, b, &GcdConfig::default())
}

/// Computes the monic GCD, switching to the half-GCD algorithm from
/// `config.gcd_cutoff` coefficients on.
///
/// # Errors
///
/// As for [`poly_gcd`].
pub fn poly_gcd_with_config(
    a: &NmodPoly,
    b: &NmodPoly,
    config: &GcdConfig,
) -> Result<NmodPoly, PolyError> {
    let (a, b, _) = ordered(a, b)?;
    let modulus = *a.modulus();

    let g = if b.is_zero() {
        a.coeffs().to_vec()
    } else if a.len() < config.gcd_cutoff {
        gcd_euclidean(a.coeffs(), b.coeffs(), &modulus)?
    } else {
        gcd_hgcd(a.coeffs(), b.coeffs(), &modulus, config)?
    };

    finish(g, modulus)
}

/// Computes the monic GCD with the Euclidean algorithm only.
///
/// # Errors
///
/// As for [`poly_gcd`].
pub fn poly_gcd_euclidean(a: &NmodPoly, b: &NmodPoly) -> Result<NmodPoly, PolyError> {
    let (a, b, _) = ordered(a, b)?;
    let modulus = *a.modulus();
    finish(gcd_euclidean(a.coeffs(), b.coeffs(), &modulus)?, modulus)
}

/// Computes the monic GCD with the half-GCD algorithm regardless of size.
///
/// # Errors
///
/// As for [`poly_gcd`].
pub fn poly_gcd_hgcd(a: &NmodPoly, b: &NmodPoly, config: &GcdConfig) -> Result<NmodPoly, PolyError> {
    let (a, b, _) = ordered(a, b)?;
    let modulus = *a.modulus();
    let g = if b.is_zero() {
        a.coeffs().to_vec()
    } else {
        gcd_hgcd(a.coeffs(), b.coeffs(), &modulus, config)?
    };
    finish(g, modulus)
}

/// Computes the monic least common multiple, `a*b / gcd(a, b)`.
///
/// The LCM with zero is zero.
///
/// # Errors
///
/// As for [`poly_gcd`].
pub fn poly_lcm(a: &NmodPoly, b: &NmodPoly) -> Result<NmodPoly, PolyError> {
    let g = poly_gcd(a, b)?;
    let modulus = *a.modulus();
    if a.is_zero() || b.is_zero() {
        return Ok(NmodPoly::zero(modulus));
    }

    let mut a_red = Vec::new();
    div_exact_vec(&mut a_red, a.coeffs(), g.coeffs(), &modulus)?;
    let mut l = Vec::new();
    mul_vec(&mut l, &a_red, b.coeffs(), &modulus);
    finish(l, modulus)
}
