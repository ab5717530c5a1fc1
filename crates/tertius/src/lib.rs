//! # Tertius
//!
//! Fast GCDs of univariate polynomials over `Z/nZ`.
//!
//! Tertius computes greatest common divisors, Bezout cofactors and
//! half-GCD reductions of dense polynomials with word-sized coefficients.
//!
//! ## Features
//!
//! - **Modular Arithmetic**: Runtime moduli up to 63 bits
//! - **Half-GCD**: Recursive reduction with its 2x2 transformation matrix
//! - **GCD/XGCD**: Euclidean for short inputs, half-GCD driven otherwise
//! - **Tunable Cutoffs**: Every algorithm switch lives in [`GcdConfig`](poly::GcdConfig)
//!
//! ## Quick Start
//!
//! ```rust
//! use tertius::prelude::*;
//!
//! let p = Modulus::new(10_007).unwrap();
//! let f = NmodPoly::from_signed(&[-1, 0, 1], p);
//! let g = NmodPoly::from_signed(&[-1, 1], p);
//!
//! let (d, s, t) = poly_xgcd(&f, &g).unwrap();
//! assert_eq!(d, g);
//! assert_eq!(s.mul(&f).add(&t.mul(&g)), d);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tertius_nmod as nmod;
pub use tertius_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tertius_nmod::{Modulus, ModulusError};
    pub use tertius_poly::{
        poly_gcd, poly_gcd_with_config, poly_hgcd, poly_lcm, poly_xgcd, poly_xgcd_with_config,
        GcdConfig, HalfGcd, NmodPoly, PolyError,
    };
}
