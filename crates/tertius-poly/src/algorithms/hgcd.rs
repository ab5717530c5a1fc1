//! Half-GCD over `Z/nZ`.
//!
//! Given `len(a) > len(b)`, the half-GCD runs the Euclidean remainder
//! sequence of `(a, b)` until the remainder has lost about half of the
//! length of `a`, and reports the reached pair `(A, B)` together with the
//! 2x2 transformation matrix `M` between the two pairs:
//!
//! ```text
//! (a, b)ᵗ = M · (A, B)ᵗ,    det(M) = sign = ±1,
//! len(A) >= len(a)/2 + 1 > len(B)
//! ```
//!
//! Equivalently `A = sign·(M3·a - M1·b)` and `B = sign·(M0·b - M2·a)`.
//! The sign is returned separately instead of being folded into `M`, so
//! the matrix entries only ever accumulate sums of products.
//!
//! Small subproblems run the plain iterative step. Larger ones split at
//! `x^m`, solve the top half recursively, lift the partial result back
//! to full length, and recurse a second time on what is left.
//!
//! All temporaries live in one arena allocated per top-level call.

use tertius_nmod::{Modulus, ModulusError};

use super::arena::{Arena, Span};
use super::mat2x2::{self, MatSpans};
use crate::config::GcdConfig;
use crate::dense::NmodPoly;
use crate::error::PolyError;

/// The reduced pair of one half-GCD call, in the caller's output buffers.
#[derive(Clone, Copy, Debug)]
struct Reduced {
    sign: i32,
    a: Span,
    b: Span,
}

/// Scratch buffers of the iterative step: a quotient, a remainder with
/// room for `len(a)`, and a product buffer for matrix updates.
#[derive(Clone, Copy, Debug)]
struct Scratch {
    q: usize,
    t: usize,
    t2: usize,
}

/// `ceil(log2(n))`.
fn clog2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Scratch consumed by all recursion levels below a call on length `lena`.
fn pool_size(lena: usize) -> usize {
    22 * lena + 16 * (clog2(lena) + 1)
}

struct Workspace<'c> {
    arena: Arena,
    config: &'c GcdConfig,
}

impl<'c> Workspace<'c> {
    /// Allocates `fixed` coefficients for inputs and outputs, followed by
    /// the matrix and the recursion pool.
    fn new(lena: usize, fixed: usize, modulus: &Modulus, config: &'c GcdConfig) -> Self {
        let arena = Arena::new(fixed + 4 * lena.div_ceil(2) + pool_size(lena), *modulus);
        tracing::debug!(lena, arena = arena.size(), "hgcd");
        Self { arena, config }
    }

    /// Runs the half-GCD on `input` and copies the results out.
    ///
    /// `fixed` is where the matrix entries begin; everything before it
    /// belongs to the inputs and outputs.
    fn run(
        &mut self,
        mat: Option<&mut [Vec<u64>; 4]>,
        input: (Span, Span),
        out: (usize, usize),
        fixed: usize,
        big_a: &mut Vec<u64>,
        big_b: &mut Vec<u64>,
    ) -> Result<i32, ModulusError> {
        let lena = input.0.len;
        let h = lena.div_ceil(2);
        let mut spans: MatSpans = std::array::from_fn(|i| Span::empty(fixed + i * h));
        let pool = fixed + 4 * h;

        let want = mat.is_some();
        let red = self.recursive(want.then_some(&mut spans), out, input.0, input.1, pool)?;

        copy_out(big_a, self.arena.get(red.a));
        copy_out(big_b, self.arena.get(red.b));
        if let Some(mat) = mat {
            for (dst, s) in mat.iter_mut().zip(spans) {
                copy_out(dst, self.arena.get(s));
            }
        }
        Ok(red.sign)
    }

    /// Half-GCD by repeated division, for short inputs.
    fn step(
        &mut self,
        mut mat: Option<&mut MatSpans>,
        out: (usize, usize),
        a: Span,
        b: Span,
        scratch: Scratch,
    ) -> Result<Reduced, ModulusError> {
        debug_assert!(a.len > b.len);
        let m = a.len / 2;

        if let Some(r) = mat.as_deref_mut() {
            *r = mat2x2::identity(&mut self.arena, mat2x2::starts(r));
        }
        let mut big_a = self.arena.set(out.0, a);
        let mut big_b = self.arena.set(out.1, b);
        let mut spare = scratch.t;
        let mut sign = 1;

        while big_b.len > m {
            let (quot, rem) = self.arena.divrem(scratch.q, spare, big_a, big_b)?;
            spare = big_a.start;
            big_a = big_b;
            big_b = rem;

            if let Some(r) = mat.as_deref_mut() {
                let p = self.arena.mul(scratch.t2, quot, r[2]);
                r[3] = self.arena.add(r[3].start, r[3], p);
                r.swap(2, 3);
                let p = self.arena.mul(scratch.t2, quot, r[0]);
                r[1] = self.arena.add(r[1].start, r[1], p);
                r.swap(0, 1);
            }
            sign = -sign;
        }

        // The pair has rotated through three buffers; move it home
        if big_b.start == out.0 {
            big_b = self.arena.set(spare, big_b);
        }
        let big_a = self.arena.set(out.0, big_a);
        let big_b = self.arena.set(out.1, big_b);

        Ok(Reduced {
            sign,
            a: big_a,
            b: big_b,
        })
    }

    /// Iterative step below the cutoff, recursion above it.
    fn dispatch(
        &mut self,
        mat: Option<&mut MatSpans>,
        out: (usize, usize),
        a: Span,
        b: Span,
        scratch: Scratch,
        pool: usize,
    ) -> Result<Reduced, ModulusError> {
        if a.len < self.config.hgcd_cutoff {
            self.step(mat, out, a, b, scratch)
        } else {
            self.recursive(mat, out, a, b, pool)
        }
    }

    /// Writes `sign·(pos.0·pos.1 - neg.0·neg.1) + x^k·hi` at `dst`.
    #[allow(clippy::too_many_arguments)]
    fn lift(
        &mut self,
        dst: usize,
        tmp: usize,
        pos: (Span, Span),
        neg: (Span, Span),
        sign: i32,
        k: usize,
        hi: Span,
    ) -> Span {
        let p = self.arena.mul(dst, pos.0, pos.1);
        let n = self.arena.mul(tmp, neg.0, neg.1);
        let r = if sign > 0 {
            self.arena.sub(dst, p, n)
        } else {
            self.arena.sub(dst, n, p)
        };
        self.arena.shifted_add(r, k, hi)
    }

    /// Divide-and-conquer half-GCD.
    ///
    /// This level's temporaries are carved from `pool`; children get the
    /// part of the pool after them.
    fn recursive(
        &mut self,
        mat: Option<&mut MatSpans>,
        out: (usize, usize),
        a: Span,
        b: Span,
        pool: usize,
    ) -> Result<Reduced, ModulusError> {
        debug_assert!(a.len > b.len);
        let lena = a.len;
        let m = lena / 2;

        if b.len <= m {
            if let Some(r) = mat {
                *r = mat2x2::identity(&mut self.arena, mat2x2::starts(r));
            }
            let big_a = self.arena.set(out.0, a);
            let big_b = self.arena.set(out.1, b);
            return Ok(Reduced {
                sign: 1,
                a: big_a,
                b: big_b,
            });
        }

        let h = lena.div_ceil(2);
        let a2 = pool;
        let b2 = a2 + lena;
        let a3 = b2 + lena;
        let b3 = a3 + lena;
        let q = b3 + lena;
        let d = q + h;
        let t0 = d + lena;
        let t1 = t0 + lena;
        let r_base = t1 + h;
        let s_base = r_base + 4 * h;
        let next = s_base + 4 * h;

        // Half-GCD of the top halves
        let mut rm: MatSpans = std::array::from_fn(|i| Span::empty(r_base + i * h));
        let scratch = Scratch { q, t: t0, t2: t1 };
        let first = self.dispatch(Some(&mut rm), (a3, b3), a.shift(m), b.shift(m), scratch, next)?;

        let lo_a = self.arena.truncate(a, m);
        let lo_b = self.arena.truncate(b, m);
        let sgn = first.sign;
        let big_b2 = self.lift(b2, t0, (rm[0], lo_b), (rm[2], lo_a), sgn, m, first.b);
        let big_a2 = self.lift(a2, t0, (rm[3], lo_a), (rm[1], lo_b), sgn, m, first.a);

        if big_b2.len <= m {
            let big_a = self.arena.set(out.0, big_a2);
            let big_b = self.arena.set(out.1, big_b2);
            if let Some(mm) = mat {
                for (dst, src) in mm.iter_mut().zip(rm) {
                    *dst = self.arena.set(dst.start, src);
                }
            }
            return Ok(Reduced {
                sign: first.sign,
                a: big_a,
                b: big_b,
            });
        }

        // One plain division, then the half-GCD of what is left
        let k = 2 * m + 1 - big_b2.len;
        let (quot, rem) = self.arena.divrem(q, d, big_a2, big_b2)?;

        let mut sm: MatSpans = std::array::from_fn(|i| Span::empty(s_base + i * h));
        let scratch = Scratch { q: a2, t: t0, t2: t1 };
        let second = self.dispatch(Some(&mut sm), (a3, b3), big_b2.shift(k), rem.shift(k), scratch, next)?;

        let lo_b2 = self.arena.truncate(big_b2, k);
        let lo_d = self.arena.truncate(rem, k);
        let sgn = second.sign;
        let big_b = self.lift(out.1, t0, (sm[0], lo_d), (sm[2], lo_b2), sgn, k, second.b);
        let big_a = self.lift(out.0, t0, (sm[3], lo_b2), (sm[1], lo_d), sgn, k, second.a);

        if let Some(mm) = mat {
            // Fold the division by `quot` into S, then M = R·S
            sm.swap(0, 2);
            sm.swap(1, 3);
            let p = self.arena.mul(t0, sm[2], quot);
            sm[0] = self.arena.add(sm[0].start, sm[0], p);
            let p = self.arena.mul(t0, sm[3], quot);
            sm[1] = self.arena.add(sm[1].start, sm[1], p);

            let cutoff = self.config.strassen_cutoff;
            *mm = mat2x2::mul(&mut self.arena, mat2x2::starts(mm), &rm, &sm, a2, b2, cutoff);
        }

        Ok(Reduced {
            sign: -(first.sign * second.sign),
            a: big_a,
            b: big_b,
        })
    }
}

fn copy_out(dst: &mut Vec<u64>, src: &[u64]) {
    dst.clear();
    dst.extend_from_slice(src);
}

fn check_args(a: &[u64], b: &[u64], modulus: &Modulus) {
    assert!(a.len() > b.len(), "hgcd requires len(a) > len(b)");
    assert!(
        a.last() != Some(&0) && b.last() != Some(&0),
        "hgcd inputs must be normalised"
    );
    debug_assert!(a.iter().chain(b).all(|&c| c < modulus.modulus()));
}

/// Computes the half-GCD of `(a, b)`.
///
/// Writes the reduced pair into `big_a`, `big_b` and, if `mat` is given,
/// the transformation matrix into its four entries (row-major), so that
/// `(a, b)ᵗ = M·(A, B)ᵗ`. Returns `det(M)`, which is `1` or `-1`.
/// For the matrix taking `(a, b)` to `(A, B)` see [`HalfGcd::forward_matrix`].
///
/// `a` and `b` must be normalised. `b` may be zero.
///
/// # Errors
///
/// Fails if a remainder's leading coefficient is not a unit, which can
/// only happen for a composite modulus.
///
/// # Panics
///
/// Panics unless `len(a) > len(b)` and both inputs are normalised.
pub fn hgcd(
    mat: Option<&mut [Vec<u64>; 4]>,
    big_a: &mut Vec<u64>,
    big_b: &mut Vec<u64>,
    a: &[u64],
    b: &[u64],
    modulus: &Modulus,
    config: &GcdConfig,
) -> Result<i32, PolyError> {
    check_args(a, b, modulus);
    let lena = a.len();

    let mut ws = Workspace::new(lena, 4 * lena, modulus, config);
    let sa = ws.arena.load(0, a);
    let sb = ws.arena.load(lena, b);
    let out = (2 * lena, 3 * lena);

    Ok(ws.run(mat, (sa, sb), out, 4 * lena, big_a, big_b)?)
}

/// Half-GCD that overwrites `a` with `A` and `b` with `B`.
///
/// Gives the same results as [`hgcd`].
///
/// # Errors
///
/// As for [`hgcd`].
///
/// # Panics
///
/// As for [`hgcd`].
pub fn hgcd_in_place(
    mat: Option<&mut [Vec<u64>; 4]>,
    a: &mut Vec<u64>,
    b: &mut Vec<u64>,
    modulus: &Modulus,
    config: &GcdConfig,
) -> Result<i32, PolyError> {
    check_args(a, b, modulus);
    let lena = a.len();

    // The input buffers double as the outputs
    let mut ws = Workspace::new(lena, 2 * lena, modulus, config);
    let sa = ws.arena.load(0, a);
    let sb = ws.arena.load(lena, b);

    Ok(ws.run(mat, (sa, sb), (0, lena), 2 * lena, a, b)?)
}

/// Half-GCD of two [`NmodPoly`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfGcd {
    /// `det(matrix)`, either `1` or `-1`.
    pub sign: i32,
    /// The longer polynomial of the reduced pair.
    pub a: NmodPoly,
    /// The shorter polynomial of the reduced pair.
    pub b: NmodPoly,
    /// `M` in row-major order, with `(a, b)ᵗ = M·(A, B)ᵗ` for the inputs.
    pub matrix: [NmodPoly; 4],
}

impl HalfGcd {
    /// The inverse transform `N = M⁻¹`, with `(A, B)ᵗ = N·(a, b)ᵗ`.
    #[must_use]
    pub fn forward_matrix(&self) -> [NmodPoly; 4] {
        let [m0, m1, m2, m3] = &self.matrix;
        if self.sign > 0 {
            [m3.clone(), m1.neg(), m2.neg(), m0.clone()]
        } else {
            [m3.neg(), m1.clone(), m2.clone(), m0.neg()]
        }
    }
}

/// Computes the half-GCD of `a` and `b` with its matrix.
///
/// # Errors
///
/// Fails on a modulus mismatch, or as for [`hgcd`].
///
/// # Panics
///
/// Panics unless `a.len() > b.len()`.
pub fn poly_hgcd(a: &NmodPoly, b: &NmodPoly, config: &GcdConfig) -> Result<HalfGcd, PolyError> {
    let modulus = *a.modulus();
    if modulus != *b.modulus() {
        return Err(PolyError::ModulusMismatch(modulus.modulus(), b.modulus().modulus()));
    }

    let mut mat: [Vec<u64>; 4] = Default::default();
    let (mut big_a, mut big_b) = (Vec::new(), Vec::new());
    let sign = hgcd(
        Some(&mut mat),
        &mut big_a,
        &mut big_b,
        a.coeffs(),
        b.coeffs(),
        &modulus,
        config,
    )?;

    Ok(HalfGcd {
        sign,
        a: NmodPoly::from_reduced(big_a, modulus),
        b: NmodPoly::from_reduced(big_b, modulus),
        matrix: mat.map(|e| NmodPoly::from_reduced(e, modulus)),
    })
}
