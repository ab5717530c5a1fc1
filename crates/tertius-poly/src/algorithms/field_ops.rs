//! Dense coefficient-vector primitives over `Z/nZ`.
//!
//! Polynomials are bare `u64` slices in ascending degree order, with the
//! length carried alongside. The slice functions never allocate for their
//! result; the `*_vec` helpers work on owned, normalised vectors and are
//! what the outer GCD loops use.

use tertius_nmod::{Modulus, ModulusError};

use super::karatsuba::{karatsuba_mul, schoolbook_mul_into, KARATSUBA_THRESHOLD};

/// Returns the length of `poly` once trailing zero coefficients are dropped.
#[inline]
#[must_use]
pub fn normalise(poly: &[u64]) -> usize {
    poly.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1)
}

/// Writes `a + b` into the first `max(a.len(), b.len())` entries of `out`.
pub fn add(out: &mut [u64], a: &[u64], b: &[u64], modulus: &Modulus) {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for i in 0..short.len() {
        out[i] = modulus.add(a[i], b[i]);
    }
    out[short.len()..long.len()].copy_from_slice(&long[short.len()..]);
}

/// Writes `a - b` into the first `max(a.len(), b.len())` entries of `out`.
pub fn sub(out: &mut [u64], a: &[u64], b: &[u64], modulus: &Modulus) {
    let min = a.len().min(b.len());
    for i in 0..min {
        out[i] = modulus.sub(a[i], b[i]);
    }
    if a.len() > min {
        out[min..a.len()].copy_from_slice(&a[min..]);
    } else {
        neg(&mut out[min..b.len()], &b[min..], modulus);
    }
}

/// Writes `-a` into the first `a.len()` entries of `out`.
pub fn neg(out: &mut [u64], a: &[u64], modulus: &Modulus) {
    for (o, &x) in out.iter_mut().zip(a) {
        *o = modulus.neg(x);
    }
}

/// Computes `x += y` in place. Requires `x.len() >= y.len()`.
pub fn add_assign(x: &mut [u64], y: &[u64], modulus: &Modulus) {
    for (c, &d) in x.iter_mut().zip(y) {
        *c = modulus.add(*c, d);
    }
}

/// Computes `x -= y` in place. Requires `x.len() >= y.len()`.
pub fn sub_assign(x: &mut [u64], y: &[u64], modulus: &Modulus) {
    for (c, &d) in x.iter_mut().zip(y) {
        *c = modulus.sub(*c, d);
    }
}

/// Computes `x = y - x` in place. Requires `x.len() >= y.len()`.
pub fn rsub_assign(x: &mut [u64], y: &[u64], modulus: &Modulus) {
    let (head, tail) = x.split_at_mut(y.len());
    for (c, &d) in head.iter_mut().zip(y) {
        *c = modulus.sub(d, *c);
    }
    for c in tail {
        *c = modulus.neg(*c);
    }
}

/// Multiplies every coefficient by `c`.
pub fn scalar_mul_assign(x: &mut [u64], c: u64, modulus: &Modulus) {
    for v in x {
        *v = modulus.mul(*v, c);
    }
}

/// Writes the product `a * b` into the first `a.len() + b.len() - 1`
/// entries of `out`.
///
/// Both operands must be non-empty and `out` must not alias either of
/// them. Passing the longer operand first avoids a swap.
pub fn mul(out: &mut [u64], a: &[u64], b: &[u64], modulus: &Modulus) {
    debug_assert!(!a.is_empty() && !b.is_empty());
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let len = long.len() + short.len() - 1;
    let out = &mut out[..len];
    out.fill(0);

    if short.len() < KARATSUBA_THRESHOLD {
        schoolbook_mul_into(out, long, short, modulus);
        return;
    }

    // Unbalanced operands: cut the long one into balanced chunks
    for (k, chunk) in long.chunks(short.len()).enumerate() {
        let offset = k * short.len();
        let prod = karatsuba_mul(chunk, short, modulus);
        add_assign(&mut out[offset..offset + prod.len()], &prod, modulus);
    }
}

/// Euclidean division of `r` by `b`, in place.
///
/// On entry `r` holds the dividend (`r.len() >= b.len() >= 1`, with a
/// non-zero leading coefficient in `b`). On exit `q[..r.len() - b.len() + 1]`
/// holds the quotient and `r[..b.len() - 1]` the remainder; the upper
/// part of `r` is zero.
///
/// # Errors
///
/// Fails if the leading coefficient of `b` is not a unit.
pub fn divrem_in_place(
    q: &mut [u64],
    r: &mut [u64],
    b: &[u64],
    modulus: &Modulus,
) -> Result<(), ModulusError> {
    let lb = b.len();
    debug_assert!(lb >= 1 && r.len() >= lb);
    let lead_inv = modulus.inv(b[lb - 1])?;

    for i in (0..=r.len() - lb).rev() {
        let c = modulus.mul(r[i + lb - 1], lead_inv);
        q[i] = c;
        if c == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            r[i + j] = modulus.sub(r[i + j], modulus.mul(c, bj));
        }
    }

    Ok(())
}

// === Owned-vector helpers ===

/// Trims trailing zero coefficients.
#[inline]
pub(crate) fn normalise_vec(v: &mut Vec<u64>) {
    let len = normalise(v);
    v.truncate(len);
}

/// Sets `out = a * b`.
pub(crate) fn mul_vec(out: &mut Vec<u64>, a: &[u64], b: &[u64], modulus: &Modulus) {
    out.clear();
    if a.is_empty() || b.is_empty() {
        return;
    }
    out.resize(a.len() + b.len() - 1, 0);
    mul(out, a, b, modulus);
    normalise_vec(out);
}

/// Sets `out = a - b`.
pub(crate) fn sub_vec(out: &mut Vec<u64>, a: &[u64], b: &[u64], modulus: &Modulus) {
    out.clear();
    out.resize(a.len().max(b.len()), 0);
    sub(out, a, b, modulus);
    normalise_vec(out);
}

/// Computes `x += y`.
pub(crate) fn add_assign_vec(x: &mut Vec<u64>, y: &[u64], modulus: &Modulus) {
    if x.len() < y.len() {
        x.resize(y.len(), 0);
    }
    add_assign(x, y, modulus);
    normalise_vec(x);
}

/// Computes `x -= y`.
pub(crate) fn sub_assign_vec(x: &mut Vec<u64>, y: &[u64], modulus: &Modulus) {
    if x.len() < y.len() {
        x.resize(y.len(), 0);
    }
    sub_assign(x, y, modulus);
    normalise_vec(x);
}

/// Sets `out = -a`.
pub(crate) fn neg_vec(out: &mut Vec<u64>, a: &[u64], modulus: &Modulus) {
    out.clear();
    out.resize(a.len(), 0);
    neg(out, a, modulus);
}

/// Sets `(q, r)` to the quotient and remainder of `a` by `b`.
///
/// `b` must be normalised and non-empty. If `a` is shorter than `b`
/// the quotient is zero and `r = a`.
pub(crate) fn divrem_vec(
    q: &mut Vec<u64>,
    r: &mut Vec<u64>,
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
) -> Result<(), ModulusError> {
    r.clear();
    r.extend_from_slice(a);
    q.clear();
    if a.len() < b.len() {
        return Ok(());
    }
    q.resize(a.len() - b.len() + 1, 0);
    divrem_in_place(q, r, b, modulus)?;
    r.truncate(b.len() - 1);
    normalise_vec(r);
    normalise_vec(q);
    Ok(())
}

/// Scales `v` to leading coefficient one and returns the factor used.
///
/// The zero polynomial is left alone, with factor one.
pub(crate) fn make_monic_vec(v: &mut [u64], modulus: &Modulus) -> Result<u64, ModulusError> {
    let Some(&lead) = v.last() else {
        return Ok(1);
    };
    let inv = modulus.inv(lead)?;
    scalar_mul_assign(v, inv, modulus);
    Ok(inv)
}

/// Sets `q = a / b` for a division known to be exact.
pub(crate) fn div_exact_vec(
    q: &mut Vec<u64>,
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
) -> Result<(), ModulusError> {
    let mut r = Vec::new();
    divrem_vec(q, &mut r, a, b, modulus)?;
    debug_assert!(r.is_empty(), "inexact division");
    Ok(())
}
