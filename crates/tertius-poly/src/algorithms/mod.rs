//! Polynomial algorithms.
//!
//! This module contains implementations of:
//! - Slice-level field arithmetic and Karatsuba multiplication
//! - 2x2 polynomial matrix products (classical and Strassen)
//! - Half-GCD, iterative and divide-and-conquer
//! - Polynomial GCD and LCM
//! - Extended GCD (Bezout coefficients)

pub mod field_ops;
pub mod gcd;
pub mod hgcd;
pub mod karatsuba;
pub mod xgcd;

pub(crate) mod arena;
pub(crate) mod mat2x2;
