//! 2x2 polynomial matrix arithmetic.
//!
//! A matrix is four independent arena buffers in row-major order,
//! `[M0 M1; M2 M3]`. Products need an output disjoint from both factors
//! and caller-provided scratch large enough for one entry product.

use super::arena::{Arena, Span};

/// The four entries of a 2x2 polynomial matrix.
pub(crate) type MatSpans = [Span; 4];

/// Sets the matrix with entry buffers at `starts` to the identity.
pub(crate) fn identity(arena: &mut Arena, starts: [usize; 4]) -> MatSpans {
    let [s0, s1, s2, s3] = starts;
    [
        arena.load(s0, &[1]),
        Span::empty(s1),
        Span::empty(s2),
        arena.load(s3, &[1]),
    ]
}

/// Start offsets of a matrix's entry buffers.
pub(crate) fn starts(m: &MatSpans) -> [usize; 4] {
    m.map(|s| s.start)
}

/// `C = A * B` with eight multiplications.
pub(crate) fn mul_classical(
    arena: &mut Arena,
    c: [usize; 4],
    a: &MatSpans,
    b: &MatSpans,
    t: usize,
) -> MatSpans {
    let mut out = [Span::default(); 4];
    for (i, o) in out.iter_mut().enumerate() {
        let (row, col) = (i / 2, i % 2);
        let x = arena.mul(c[i], a[2 * row], b[col]);
        let y = arena.mul(t, a[2 * row + 1], b[2 + col]);
        *o = arena.add(c[i], x, y);
    }
    out
}

/// `C = A * B` with seven multiplications (Winograd's form of Strassen).
pub(crate) fn mul_strassen(
    arena: &mut Arena,
    c: [usize; 4],
    a: &MatSpans,
    b: &MatSpans,
    t0: usize,
    t1: usize,
) -> MatSpans {
    let [a0, a1, a2, a3] = *a;
    let [b0, b1, b2, b3] = *b;

    let mut s0 = arena.sub(t0, a0, a2);
    let mut s1 = arena.sub(t1, b3, b1);
    let mut c2 = arena.mul(c[2], s0, s1);

    s0 = arena.add(t0, a2, a3);
    s1 = arena.sub(t1, b1, b0);
    let mut c3 = arena.mul(c[3], s0, s1);

    s0 = arena.sub(t0, s0, a0);
    s1 = arena.sub(t1, b3, s1);
    let mut c1 = arena.mul(c[1], s0, s1);

    s0 = arena.sub(t0, a1, s0);
    let mut c0 = arena.mul(c[0], s0, b3);

    s0 = arena.mul(t0, a0, b0);

    c1 = arena.add(c[1], s0, c1);
    c2 = arena.add(c[2], c1, c2);
    c1 = arena.add(c[1], c1, c3);
    c3 = arena.add(c[3], c2, c3);
    c1 = arena.add(c[1], c1, c0);

    s1 = arena.sub(t1, s1, b2);
    c0 = arena.mul(c[0], a3, s1);

    c2 = arena.sub(c[2], c2, c0);
    c0 = arena.mul(c[0], a1, b2);
    c0 = arena.add(c[0], c0, s0);

    [c0, c1, c2, c3]
}

/// `C = A * B`, choosing the algorithm by the shortest operand entry.
///
/// Strassen's extra additions only pay off once every entry has at least
/// `strassen_cutoff` coefficients.
pub(crate) fn mul(
    arena: &mut Arena,
    c: [usize; 4],
    a: &MatSpans,
    b: &MatSpans,
    t0: usize,
    t1: usize,
    strassen_cutoff: usize,
) -> MatSpans {
    let min = a.iter().chain(b).map(|s| s.len).min().unwrap_or(0);
    if min < strassen_cutoff {
        mul_classical(arena, c, a, b, t0)
    } else {
        mul_strassen(arena, c, a, b, t0, t1)
    }
}
