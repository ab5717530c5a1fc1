//! Karatsuba multiplication algorithm.
//!
//! This module provides the Karatsuba divide-and-conquer multiplication
//! algorithm over `Z/nZ`, which achieves O(n^1.58) complexity.

use tertius_nmod::Modulus;

/// Karatsuba multiplication threshold.
///
/// Below this length, schoolbook multiplication is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Performs Karatsuba multiplication on coefficient slices.
///
/// Returns exactly `a.len() + b.len() - 1` product coefficients, without
/// trimming. Both inputs must be non-empty.
#[must_use]
pub fn karatsuba_mul(a: &[u64], b: &[u64], modulus: &Modulus) -> Vec<u64> {
    let n = a.len();
    let m = b.len();

    // Base case
    if n < KARATSUBA_THRESHOLD || m < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b, modulus);
    }

    // Make both the same size (power of 2)
    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, 0);
    b_ext.resize(size, 0);

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let z0 = karatsuba_mul(a0, b0, modulus);
    let z2 = karatsuba_mul(a1, b1, modulus);

    let a01: Vec<u64> = a0.iter().zip(a1).map(|(&x, &y)| modulus.add(x, y)).collect();
    let b01: Vec<u64> = b0.iter().zip(b1).map(|(&x, &y)| modulus.add(x, y)).collect();

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let mut z1 = karatsuba_mul(&a01, &b01, modulus);
    for ((c, &x), &y) in z1.iter_mut().zip(&z0).zip(&z2) {
        *c = modulus.sub(modulus.sub(*c, x), y);
    }

    // Combine: result = z0 + z1*x^half + z2*x^(2*half)
    let mut result = vec![0; 2 * size - 1];
    result[..z0.len()].copy_from_slice(&z0);

    for (i, &c) in z1.iter().enumerate() {
        result[i + half] = modulus.add(result[i + half], c);
    }

    for (i, &c) in z2.iter().enumerate() {
        result[i + size] = modulus.add(result[i + size], c);
    }

    // Padding only contributes zeros above the true product length
    result.truncate(n + m - 1);
    result
}

/// Schoolbook multiplication: O(n²).
///
/// Returns exactly `a.len() + b.len() - 1` coefficients.
#[must_use]
pub fn schoolbook_mul(a: &[u64], b: &[u64], modulus: &Modulus) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0; a.len() + b.len() - 1];
    schoolbook_mul_into(&mut result, a, b, modulus);
    result
}

/// Schoolbook multiplication into a caller-provided, zeroed buffer.
pub(crate) fn schoolbook_mul_into(out: &mut [u64], a: &[u64], b: &[u64], modulus: &Modulus) {
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] = modulus.mul_add(x, y, out[i + j]);
        }
    }
}
