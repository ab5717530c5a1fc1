//! Property-based tests for word-sized modular arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::modular::primes::{P10007, P2_62_MINUS_57, P998244353};
    use crate::Modulus;

    // Strategy for picking one of a few prime moduli
    fn prime_modulus() -> impl Strategy<Value = Modulus> {
        prop_oneof![Just(P10007), Just(P998244353), Just(P2_62_MINUS_57)]
            .prop_map(|p| Modulus::new(p).unwrap())
    }

    // Strategy for a modulus together with two residues
    fn modulus_and_pair() -> impl Strategy<Value = (Modulus, u64, u64)> {
        (prime_modulus(), any::<u64>(), any::<u64>())
            .prop_map(|(m, a, b)| (m, m.reduce(a), m.reduce(b)))
    }

    proptest! {
        // Ring axioms

        #[test]
        fn add_commutative((m, a, b) in modulus_and_pair()) {
            prop_assert_eq!(m.add(a, b), m.add(b, a));
        }

        #[test]
        fn mul_commutative((m, a, b) in modulus_and_pair()) {
            prop_assert_eq!(m.mul(a, b), m.mul(b, a));
        }

        #[test]
        fn sub_is_add_neg((m, a, b) in modulus_and_pair()) {
            prop_assert_eq!(m.sub(a, b), m.add(a, m.neg(b)));
        }

        #[test]
        fn distributive((m, a, b) in modulus_and_pair(), c in any::<u64>()) {
            let c = m.reduce(c);
            prop_assert_eq!(m.mul(c, m.add(a, b)), m.add(m.mul(c, a), m.mul(c, b)));
        }

        #[test]
        fn mul_add_matches((m, a, b) in modulus_and_pair(), c in any::<u64>()) {
            let c = m.reduce(c);
            prop_assert_eq!(m.mul_add(a, b, c), m.add(m.mul(a, b), c));
        }

        #[test]
        fn from_signed_matches_neg(m in prime_modulus(), x in 1i64..i64::MAX) {
            prop_assert_eq!(m.from_signed(-x), m.neg(m.reduce(x.unsigned_abs())));
        }

        // Field properties

        #[test]
        fn inverse((m, a, _b) in modulus_and_pair()) {
            prop_assume!(a != 0);
            let inv = m.inv(a).expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!(m.mul(a, inv), 1);
        }

        #[test]
        fn fermat_little_theorem((m, a, _b) in modulus_and_pair()) {
            prop_assume!(a != 0);
            // a^(p-1) = 1 (mod p) for a != 0
            prop_assert_eq!(m.pow(a, m.modulus() - 1), 1);
        }
    }
}
