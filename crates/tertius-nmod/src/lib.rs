//! # tertius-nmod
//!
//! Word-sized modular arithmetic for Tertius CAS.
//!
//! This crate provides:
//! - A runtime modulus context (`Modulus`) for `Z/nZ` with `n < 2^63`
//! - Modular inversion that reports non-invertible elements as errors
//! - Deterministic primality testing for word-sized moduli
//!
//! ## Performance Notes
//!
//! - Residues are bare `u64` values, so coefficient vectors stay flat
//! - Products are reduced through a single `u128` remainder

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod modular;

#[cfg(test)]
mod proptests;

pub use modular::{primes, Modulus, ModulusError};
