//! Dense univariate polynomials over `Z/nZ`.
//!
//! This module provides the owning polynomial type used at the public
//! boundary. Arithmetic delegates to the slice primitives in
//! [`crate::algorithms::field_ops`].

use std::fmt;

use tertius_nmod::Modulus;

use crate::algorithms::field_ops::{self, add_assign_vec, divrem_vec, mul_vec, neg_vec, sub_vec};
use crate::algorithms::{gcd, hgcd, xgcd};
use crate::config::GcdConfig;
use crate::error::PolyError;

/// A dense univariate polynomial over `Z/nZ`.
///
/// Coefficients are reduced residues stored in ascending degree order,
/// with no trailing zeros; the zero polynomial has no coefficients.
/// Combining polynomials over different moduli is a logic error.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NmodPoly {
    /// Coefficients in ascending degree order.
    coeffs: Vec<u64>,
    modulus: Modulus,
}

impl NmodPoly {
    /// Creates a new polynomial, reducing and normalising the coefficients.
    #[must_use]
    pub fn new(coeffs: Vec<u64>, modulus: Modulus) -> Self {
        let coeffs = coeffs.into_iter().map(|c| modulus.reduce(c)).collect();
        Self::from_reduced(coeffs, modulus)
    }

    /// Creates a polynomial from signed coefficients.
    #[must_use]
    pub fn from_signed(coeffs: &[i64], modulus: Modulus) -> Self {
        let coeffs = coeffs.iter().map(|&c| modulus.from_signed(c)).collect();
        Self::from_reduced(coeffs, modulus)
    }

    /// Wraps coefficients that are already reduced.
    pub(crate) fn from_reduced(mut coeffs: Vec<u64>, modulus: Modulus) -> Self {
        debug_assert!(coeffs.iter().all(|&c| c < modulus.modulus()));
        field_ops::normalise_vec(&mut coeffs);
        Self { coeffs, modulus }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(modulus: Modulus) -> Self {
        Self {
            coeffs: Vec::new(),
            modulus,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(modulus: Modulus) -> Self {
        Self::constant(1, modulus)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: u64, modulus: Modulus) -> Self {
        Self::new(vec![c], modulus)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x(modulus: Modulus) -> Self {
        Self::monomial(1, 1, modulus)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: u64, n: usize, modulus: Modulus) -> Self {
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c;
        Self::new(coeffs, modulus)
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Returns the number of coefficients (zero for the zero polynomial).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs == [1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<u64> {
        self.coeffs.last().copied()
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: u64) -> u64 {
        let m = &self.modulus;
        let x = m.reduce(x);
        self.coeffs.iter().rev().fold(0, |acc, &c| m.mul_add(acc, x, c))
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus);
        let mut coeffs = self.coeffs.clone();
        add_assign_vec(&mut coeffs, &other.coeffs, &self.modulus);
        Self::from_reduced(coeffs, self.modulus)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus);
        let mut coeffs = Vec::new();
        sub_vec(&mut coeffs, &self.coeffs, &other.coeffs, &self.modulus);
        Self::from_reduced(coeffs, self.modulus)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        let mut coeffs = Vec::new();
        neg_vec(&mut coeffs, &self.coeffs, &self.modulus);
        Self::from_reduced(coeffs, self.modulus)
    }

    /// Multiplies two polynomials.
    ///
    /// Uses schoolbook multiplication for short operands and Karatsuba
    /// above [`KARATSUBA_THRESHOLD`](crate::algorithms::karatsuba::KARATSUBA_THRESHOLD).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus);
        let mut coeffs = Vec::new();
        mul_vec(&mut coeffs, &self.coeffs, &other.coeffs, &self.modulus);
        Self::from_reduced(coeffs, self.modulus)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: u64) -> Self {
        let mut coeffs = self.coeffs.clone();
        field_ops::scalar_mul_assign(&mut coeffs, self.modulus.reduce(c), &self.modulus);
        Self::from_reduced(coeffs, self.modulus)
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![0; n];
        coeffs.extend_from_slice(&self.coeffs);
        Self::from_reduced(coeffs, self.modulus)
    }

    /// Divides by `other`, returning (quotient, remainder).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` is zero, and a
    /// modulus error if its leading coefficient is not a unit.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError> {
        debug_assert_eq!(self.modulus, other.modulus);
        if other.is_zero() {
            return Err(PolyError::DivisionByZero);
        }

        let (mut q, mut r) = (Vec::new(), Vec::new());
        divrem_vec(&mut q, &mut r, &self.coeffs, &other.coeffs, &self.modulus)?;
        Ok((
            Self::from_reduced(q, self.modulus),
            Self::from_reduced(r, self.modulus),
        ))
    }

    /// Returns the remainder of division by `other`.
    ///
    /// # Errors
    ///
    /// As for [`NmodPoly::div_rem`].
    pub fn rem(&self, other: &Self) -> Result<Self, PolyError> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Makes the polynomial monic (leading coefficient = 1).
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Fails if the leading coefficient is not a unit.
    pub fn make_monic(&self) -> Result<Self, PolyError> {
        let mut coeffs = self.coeffs.clone();
        field_ops::make_monic_vec(&mut coeffs, &self.modulus)?;
        Ok(Self::from_reduced(coeffs, self.modulus))
    }

    /// Monic greatest common divisor.
    ///
    /// # Errors
    ///
    /// See [`gcd::poly_gcd`].
    pub fn gcd(&self, other: &Self) -> Result<Self, PolyError> {
        gcd::poly_gcd(self, other)
    }

    /// Monic GCD with Bezout coefficients, `(g, s, t)` with `s*self + t*other = g`.
    ///
    /// # Errors
    ///
    /// See [`xgcd::poly_xgcd`].
    pub fn xgcd(&self, other: &Self) -> Result<(Self, Self, Self), PolyError> {
        xgcd::poly_xgcd(self, other)
    }

    /// Half-GCD of `self` and `other`; see [`hgcd::hgcd`].
    ///
    /// # Errors
    ///
    /// Fails on a modulus mismatch or a non-invertible leading coefficient.
    ///
    /// # Panics
    ///
    /// Panics unless `self.len() > other.len()`.
    pub fn half_gcd(&self, other: &Self, config: &GcdConfig) -> Result<hgcd::HalfGcd, PolyError> {
        hgcd::poly_hgcd(self, other, config)
    }
}

impl fmt::Display for NmodPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0 {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
