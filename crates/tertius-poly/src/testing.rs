//! Random inputs for the unit tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tertius_nmod::Modulus;

use crate::dense::NmodPoly;

/// A reproducible generator.
pub(crate) fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `len` uniformly random residues; the top ones may be zero.
pub(crate) fn random_poly<R: Rng + ?Sized>(rng: &mut R, len: usize, modulus: &Modulus) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(0..modulus.modulus())).collect()
}

/// `len` random residues with a non-zero leading one.
pub(crate) fn random_nonzero<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    modulus: &Modulus,
) -> Vec<u64> {
    let mut v = random_poly(rng, len, modulus);
    if let Some(lead) = v.last_mut() {
        *lead = rng.gen_range(1..modulus.modulus());
    }
    v
}

/// A random polynomial of exactly `len` coefficients.
pub(crate) fn random_nmod<R: Rng + ?Sized>(rng: &mut R, len: usize, modulus: Modulus) -> NmodPoly {
    NmodPoly::new(random_nonzero(rng, len, &modulus), modulus)
}
