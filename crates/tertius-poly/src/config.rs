//! Tuning thresholds for the GCD family.
//!
//! Thresholds only affect speed: any valid configuration
//! produces the same results.

use tertius_nmod::Modulus;

/// Size cutoffs for half-GCD based algorithms.
#[derive(Clone, Debug)]
pub struct GcdConfig {
    /// Below this length the half-GCD runs its iterative Euclidean step
    /// instead of recursing.
    pub hgcd_cutoff: usize,
    /// Below this length `gcd` uses plain Euclid.
    pub gcd_cutoff: usize,
    /// Replaces `gcd_cutoff` for moduli of at most `small_modulus_bits` bits.
    pub small_gcd_cutoff: usize,
    /// Bit size at or below which a modulus counts as small.
    pub small_modulus_bits: u32,
    /// Below this length `xgcd` uses plain extended Euclid.
    pub xgcd_cutoff: usize,
    /// Minimum entry length for Strassen 2x2 matrix products.
    pub strassen_cutoff: usize,
}

impl Default for GcdConfig {
    fn default() -> Self {
        Self {
            hgcd_cutoff: 100,
            gcd_cutoff: 340,
            small_gcd_cutoff: 200,
            small_modulus_bits: 8,
            xgcd_cutoff: 340,
            strassen_cutoff: 20,
        }
    }
}

impl GcdConfig {
    /// Length below which the outer half-GCD loops finish with plain
    /// Euclid, for the given modulus.
    #[must_use]
    pub fn euclidean_cutoff(&self, modulus: &Modulus) -> usize {
        if modulus.bits() <= self.small_modulus_bits {
            self.small_gcd_cutoff
        } else {
            self.gcd_cutoff
        }
    }
}
