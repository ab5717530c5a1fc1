//! Scratch arena for the half-GCD engine.
//!
//! One contiguous `Vec<u64>` backs every temporary polynomial of a
//! top-level half-GCD call. Buffers are named by [`Span`] handles (an
//! offset and a length), so moving or swapping a buffer is a handle copy
//! and never touches coefficient data. Attached views (`x^k`-shifts and
//! truncations of an existing buffer) are spans too.
//!
//! Aliasing rules follow the operation:
//! - `set` copies between arbitrary, possibly overlapping spans;
//! - `add`/`sub` may write over either operand in place;
//! - `mul` and `divrem` need outputs disjoint from their inputs.

use std::ops::Range;

use tertius_nmod::{Modulus, ModulusError};

use super::field_ops;

/// A polynomial buffer inside an [`Arena`]: `len` coefficients from `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    /// An empty (zero) polynomial whose buffer begins at `start`.
    pub const fn empty(start: usize) -> Self {
        Self { start, len: 0 }
    }

    pub const fn end(self) -> usize {
        self.start + self.len
    }

    pub const fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Attaches the view of `self` divided by `x^k` (the high part).
    pub const fn shift(self, k: usize) -> Self {
        if self.len > k {
            Self {
                start: self.start + k,
                len: self.len - k,
            }
        } else {
            Self::empty(self.start)
        }
    }
}

/// Read-only access to the parts of the arena left over after carving out
/// one or two mutable destinations.
struct Sources<'a> {
    segments: [(usize, &'a [u64]); 3],
}

impl<'a> Sources<'a> {
    fn get(&self, s: Span) -> &'a [u64] {
        if s.len == 0 {
            return &[];
        }
        for &(base, seg) in &self.segments {
            if s.start >= base && s.end() <= base + seg.len() {
                return &seg[s.start - base..s.end() - base];
            }
        }
        panic!("span {s:?} overlaps a destination buffer");
    }
}

/// Splits out `dst` mutably; everything else stays readable.
fn split_one(data: &mut [u64], dst: Range<usize>) -> (&mut [u64], Sources<'_>) {
    let (lo, rest) = data.split_at_mut(dst.start);
    let (out, hi) = rest.split_at_mut(dst.len());
    let sources = Sources {
        segments: [(0, &*lo), (dst.end, &*hi), (0, &[])],
    };
    (out, sources)
}

/// Splits out two disjoint destinations mutably, in argument order.
fn split_two(
    data: &mut [u64],
    d1: Range<usize>,
    d2: Range<usize>,
) -> (&mut [u64], &mut [u64], Sources<'_>) {
    let swapped = d1.start > d2.start;
    let (first, second) = if swapped { (d2, d1) } else { (d1, d2) };
    debug_assert!(first.end <= second.start, "destinations overlap");

    let (lo, rest) = data.split_at_mut(first.start);
    let (o1, rest) = rest.split_at_mut(first.len());
    let (mid, rest) = rest.split_at_mut(second.start - first.end);
    let (o2, hi) = rest.split_at_mut(second.len());
    let sources = Sources {
        segments: [(0, &*lo), (first.end, &*mid), (second.end, &*hi)],
    };

    if swapped {
        (o2, o1, sources)
    } else {
        (o1, o2, sources)
    }
}

/// Writing `len` entries at `dst` is compatible with reading `src`
/// elementwise: either `src` starts exactly at `dst` or they are disjoint.
fn elementwise_ok(dst: usize, len: usize, src: Span) -> bool {
    src.len == 0 || src.start == dst || dst + len <= src.start || src.end() <= dst
}

/// The scratch arena of one top-level half-GCD call.
pub(crate) struct Arena {
    data: Vec<u64>,
    modulus: Modulus,
}

impl Arena {
    /// Allocates a zeroed arena of `size` coefficients.
    pub fn new(size: usize, modulus: Modulus) -> Self {
        Self {
            data: vec![0; size],
            modulus,
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, s: Span) -> &[u64] {
        &self.data[s.range()]
    }

    /// Copies external coefficients into the arena at `start`.
    pub fn load(&mut self, start: usize, src: &[u64]) -> Span {
        self.data[start..start + src.len()].copy_from_slice(src);
        Span {
            start,
            len: src.len(),
        }
    }

    /// Drops trailing zeros from `s`.
    pub fn normalise(&self, s: Span) -> Span {
        Span {
            start: s.start,
            len: field_ops::normalise(self.get(s)),
        }
    }

    /// Attaches the view of `s` reduced modulo `x^k` (the low part).
    pub fn truncate(&self, s: Span, k: usize) -> Span {
        self.normalise(Span {
            start: s.start,
            len: s.len.min(k),
        })
    }

    /// Copies `src` to `dst`. Overlap is allowed.
    pub fn set(&mut self, dst: usize, src: Span) -> Span {
        if src.start != dst {
            self.data.copy_within(src.range(), dst);
        }
        Span {
            start: dst,
            len: src.len,
        }
    }

    /// Writes `a + b` at `dst`.
    pub fn add(&mut self, dst: usize, a: Span, b: Span) -> Span {
        let len = a.len.max(b.len);
        debug_assert!(elementwise_ok(dst, len, a) && elementwise_ok(dst, len, b));
        for i in 0..len {
            let x = if i < a.len { self.data[a.start + i] } else { 0 };
            let y = if i < b.len { self.data[b.start + i] } else { 0 };
            self.data[dst + i] = self.modulus.add(x, y);
        }
        self.normalise(Span { start: dst, len })
    }

    /// Writes `a - b` at `dst`.
    pub fn sub(&mut self, dst: usize, a: Span, b: Span) -> Span {
        let len = a.len.max(b.len);
        debug_assert!(elementwise_ok(dst, len, a) && elementwise_ok(dst, len, b));
        for i in 0..len {
            let x = if i < a.len { self.data[a.start + i] } else { 0 };
            let y = if i < b.len { self.data[b.start + i] } else { 0 };
            self.data[dst + i] = self.modulus.sub(x, y);
        }
        self.normalise(Span { start: dst, len })
    }

    /// Writes `a * b` at `dst`, which must not overlap either operand.
    pub fn mul(&mut self, dst: usize, a: Span, b: Span) -> Span {
        if a.len == 0 || b.len == 0 {
            return Span::empty(dst);
        }
        let len = a.len + b.len - 1;
        let (out, src) = split_one(&mut self.data, dst..dst + len);
        let (x, y) = (src.get(a), src.get(b));
        if x.len() >= y.len() {
            field_ops::mul(out, x, y, &self.modulus);
        } else {
            field_ops::mul(out, y, x, &self.modulus);
        }
        self.normalise(Span { start: dst, len })
    }

    /// Divides `a` by `b`, writing the quotient at `q_dst` and the
    /// remainder at `r_dst`.
    ///
    /// The remainder buffer must have room for `a.len()` coefficients,
    /// since the division runs in place over a copy of `a`. Neither
    /// destination may overlap `b`.
    pub fn divrem(
        &mut self,
        q_dst: usize,
        r_dst: usize,
        a: Span,
        b: Span,
    ) -> Result<(Span, Span), ModulusError> {
        debug_assert!(b.len > 0);
        let r = self.set(r_dst, a);
        if a.len < b.len {
            return Ok((Span::empty(q_dst), r));
        }

        let q = Span {
            start: q_dst,
            len: a.len - b.len + 1,
        };
        let (quot, rem, src) = split_two(&mut self.data, q.range(), r.range());
        field_ops::divrem_in_place(quot, rem, src.get(b), &self.modulus)?;

        let r = self.normalise(Span {
            start: r_dst,
            len: b.len - 1,
        });
        Ok((self.normalise(q), r))
    }

    /// Computes `dst += x^k * src`, zero-extending `dst` as needed.
    ///
    /// `src` must be disjoint from the extended `dst`.
    pub fn shifted_add(&mut self, dst: Span, k: usize, src: Span) -> Span {
        if src.len == 0 {
            return dst;
        }
        let end = k + src.len;
        if end > dst.len {
            self.data[dst.end()..dst.start + end].fill(0);
        }
        for i in 0..src.len {
            let at = dst.start + k + i;
            self.data[at] = self.modulus.add(self.data[at], self.data[src.start + i]);
        }
        self.normalise(Span {
            start: dst.start,
            len: dst.len.max(end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(size: usize) -> Arena {
        Arena::new(size, Modulus::new(101).unwrap())
    }

    #[test]
    fn test_span_shift() {
        let s = Span { start: 10, len: 5 };
        assert_eq!(s.shift(2), Span { start: 12, len: 3 });
        assert_eq!(s.shift(5).len, 0);
        assert_eq!(s.shift(9).len, 0);
    }

    #[test]
    fn test_truncate_normalises() {
        let mut ar = arena(8);
        let s = ar.load(0, &[3, 0, 0, 7]);
        assert_eq!(ar.truncate(s, 3), Span { start: 0, len: 1 });
        assert_eq!(ar.truncate(s, 10), s);
    }

    #[test]
    fn test_add_in_place_both_sides() {
        let mut ar = arena(16);
        let a = ar.load(0, &[1, 2, 3]);
        let b = ar.load(8, &[100, 99]);

        let c = ar.add(a.start, a, b);
        assert_eq!(ar.get(c), &[0, 0, 3]);

        let d = ar.sub(b.start, c, b);
        // b was overwritten elementwise: [0 - 100, 0 - 99, 3]
        assert_eq!(ar.get(d), &[1, 2, 3]);
    }

    #[test]
    fn test_sub_cancels_to_zero() {
        let mut ar = arena(8);
        let a = ar.load(0, &[4, 5]);
        let z = ar.sub(a.start, a, a);
        assert_eq!(z.len, 0);
    }

    #[test]
    fn test_mul_and_divrem() {
        let mut ar = arena(32);
        let a = ar.load(0, &[1, 1]); // 1 + x
        let b = ar.load(2, &[100, 1]); // x - 1
        let c = ar.mul(4, a, b); // x^2 - 1
        assert_eq!(ar.get(c), &[100, 0, 1]);

        let (q, r) = ar.divrem(8, 12, c, a).unwrap();
        assert_eq!(ar.get(q), &[100, 1]);
        assert_eq!(r.len, 0);

        // Dividend shorter than divisor: quotient zero, remainder copied
        let (q, r) = ar.divrem(20, 24, a, c).unwrap();
        assert_eq!(q.len, 0);
        assert_eq!(ar.get(r), &[1, 1]);
    }

    #[test]
    fn test_shifted_add() {
        let mut ar = arena(16);
        let d = ar.load(0, &[1, 2]);
        let s = ar.load(10, &[5, 6]);
        let r = ar.shifted_add(d, 3, s);
        assert_eq!(ar.get(r), &[1, 2, 0, 5, 6]);

        let e = ar.load(0, &[1, 2, 3, 4]);
        let r = ar.shifted_add(e, 1, s);
        assert_eq!(ar.get(r), &[1, 7, 9, 4]);
    }

    #[test]
    #[should_panic(expected = "overlaps a destination")]
    fn test_mul_rejects_overlap() {
        let mut ar = arena(16);
        let a = ar.load(0, &[1, 2, 3]);
        let _ = ar.mul(1, a, a);
    }
}
