//! Word-sized modular arithmetic.
//!
//! This module provides arithmetic in `Z/nZ` for a modulus chosen at
//! runtime, as needed by dense polynomial arithmetic over prime fields.
//! Residues are plain `u64` values in `[0, n)`; the [`Modulus`] context
//! carries everything required to combine them.

use std::fmt;

use thiserror::Error;

/// Errors raised by modular arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModulusError {
    /// The modulus is outside the supported range.
    #[error("modulus must satisfy 2 <= n < 2^63, got {0}")]
    InvalidModulus(u64),

    /// A division required the inverse of a zero divisor.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible {
        /// The residue that has no inverse.
        value: u64,
        /// The modulus in effect.
        modulus: u64,
    },
}

/// A runtime word-sized modulus.
///
/// The modulus is bounded by `2^63` so that the sum of two reduced
/// residues never overflows a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus {
    n: u64,
    bits: u32,
}

impl Modulus {
    /// Creates a new modulus.
    ///
    /// # Errors
    ///
    /// Returns [`ModulusError::InvalidModulus`] if `n < 2` or `n >= 2^63`.
    pub fn new(n: u64) -> Result<Self, ModulusError> {
        if n < 2 || n >= 1 << 63 {
            return Err(ModulusError::InvalidModulus(n));
        }
        Ok(Self {
            n,
            bits: u64::BITS - n.leading_zeros(),
        })
    }

    /// Returns the modulus `n`.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.n
    }

    /// Returns the number of bits of `n`.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Reduces an arbitrary `u64` into `[0, n)`.
    #[inline]
    #[must_use]
    pub const fn reduce(&self, x: u64) -> u64 {
        x % self.n
    }

    /// Maps a signed value to its residue.
    #[must_use]
    pub fn from_signed(&self, x: i64) -> u64 {
        let r = self.reduce(x.unsigned_abs());
        if x < 0 {
            self.neg(r)
        } else {
            r
        }
    }

    /// Computes `a + b mod n`.
    #[inline]
    #[must_use]
    pub const fn add(&self, a: u64, b: u64) -> u64 {
        let s = a + b;
        if s >= self.n {
            s - self.n
        } else {
            s
        }
    }

    /// Computes `a - b mod n`.
    #[inline]
    #[must_use]
    pub const fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.n - b
        }
    }

    /// Computes `-a mod n`.
    #[inline]
    #[must_use]
    pub const fn neg(&self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.n - a
        }
    }

    /// Computes `a * b mod n`.
    #[inline]
    #[must_use]
    pub const fn mul(&self, a: u64, b: u64) -> u64 {
        // Use u128 to avoid overflow
        ((a as u128 * b as u128) % self.n as u128) as u64
    }

    /// Computes `a * b + c mod n`.
    #[inline]
    #[must_use]
    pub const fn mul_add(&self, a: u64, b: u64, c: u64) -> u64 {
        ((a as u128 * b as u128 + c as u128) % self.n as u128) as u64
    }

    /// Computes `a^exp mod n` by binary exponentiation.
    #[must_use]
    pub fn pow(&self, a: u64, mut exp: u64) -> u64 {
        let mut base = a;
        let mut result = self.reduce(1);

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }

        result
    }

    /// Computes the inverse of `a` using the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ModulusError::NotInvertible`] if `gcd(a, n) != 1`.
    pub fn inv(&self, a: u64) -> Result<u64, ModulusError> {
        let a = self.reduce(a);
        let not_invertible = ModulusError::NotInvertible {
            value: a,
            modulus: self.n,
        };
        if a == 0 {
            return Err(not_invertible);
        }

        // Both n and a fit in i64 because n < 2^63
        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = self.n as i64;
        let mut new_r = a as i64;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return Err(not_invertible);
        }

        Ok(self.from_signed(t))
    }

    /// Returns true if `n` is prime.
    ///
    /// Deterministic Miller-Rabin; the first twelve prime bases are
    /// sufficient for every 64-bit integer.
    #[must_use]
    pub fn is_prime(&self) -> bool {
        const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

        let n = self.n;
        for p in BASES {
            if n == p {
                return true;
            }
            if n % p == 0 {
                return false;
            }
        }

        let s = (n - 1).trailing_zeros();
        let d = (n - 1) >> s;

        'witness: for a in BASES {
            let mut x = self.pow(a, d);
            if x == 1 || x == n - 1 {
                continue;
            }
            for _ in 1..s {
                x = self.mul(x, x);
                if x == n - 1 {
                    continue 'witness;
                }
            }
            return false;
        }

        true
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({})", self.n)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}

/// Common word-sized primes.
pub mod primes {
    /// 2^23 * 7 * 17 + 1 = 998244353 (common competitive programming prime)
    pub const P998244353: u64 = 998_244_353;

    /// Small prime used in examples and regression tests.
    pub const P10007: u64 = 10_007;

    /// Largest prime below 2^8, for the small-modulus GCD cutoff.
    pub const P251: u64 = 251;

    /// Largest prime below 2^62.
    pub const P2_62_MINUS_57: u64 = (1 << 62) - 57;
}
