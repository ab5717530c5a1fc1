//! # tertius-poly
//!
//! Dense polynomial arithmetic over `Z/nZ` for Tertius CAS.
//!
//! This crate provides:
//! - Dense univariate polynomials with a word-sized runtime modulus
//! - Schoolbook/Karatsuba multiplication
//! - The half-GCD algorithm with its 2x2 transformation matrix
//! - GCD, LCM and extended GCD built on top of it
//!
//! ## Algorithm Selection
//!
//! Every GCD entry point picks its algorithm from a [`GcdConfig`]:
//! - Length < `gcd_cutoff`/`xgcd_cutoff`: Euclidean O(n²)
//! - Otherwise: half-GCD, O(M(n) log n) for multiplication cost M(n)
//!
//! Inside the half-GCD, subproblems shorter than `hgcd_cutoff` run plain
//! division steps, and matrix products switch to Strassen once every
//! entry reaches `strassen_cutoff` coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod config;
pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod testing;

pub use algorithms::gcd::{poly_gcd, poly_gcd_with_config, poly_lcm};
pub use algorithms::hgcd::{hgcd, hgcd_in_place, poly_hgcd, HalfGcd};
pub use algorithms::xgcd::{poly_xgcd, poly_xgcd_with_config};
pub use config::GcdConfig;
pub use dense::NmodPoly;
pub use error::PolyError;
