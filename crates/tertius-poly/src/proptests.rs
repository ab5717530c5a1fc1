//! Property-based tests for polynomial arithmetic and the GCD family.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tertius_nmod::{primes, Modulus};

    use crate::algorithms::gcd::{poly_gcd_euclidean, poly_gcd_with_config};
    use crate::algorithms::hgcd::hgcd_in_place;
    use crate::algorithms::karatsuba::schoolbook_mul;
    use crate::algorithms::xgcd::poly_xgcd_with_config;
    use crate::config::GcdConfig;
    use crate::dense::NmodPoly;

    fn modulus() -> impl Strategy<Value = Modulus> {
        prop::sample::select(vec![primes::P251, primes::P10007, primes::P998244353])
            .prop_map(|p| Modulus::new(p).unwrap())
    }

    fn poly(m: Modulus, max_len: usize) -> impl Strategy<Value = NmodPoly> {
        proptest::collection::vec(0..m.modulus(), 0..=max_len).prop_map(move |c| NmodPoly::new(c, m))
    }

    // Two or three polynomials over one random prime
    fn pair(max_len: usize) -> impl Strategy<Value = (NmodPoly, NmodPoly)> {
        modulus().prop_flat_map(move |m| (poly(m, max_len), poly(m, max_len)))
    }

    fn triple(max_len: usize) -> impl Strategy<Value = (NmodPoly, NmodPoly, NmodPoly)> {
        modulus().prop_flat_map(move |m| (poly(m, max_len), poly(m, max_len), poly(m, max_len)))
    }

    // Small thresholds, so that short inputs reach every code path
    fn config() -> impl Strategy<Value = GcdConfig> {
        (2usize..8, 2usize..10, 2usize..10, 0usize..6).prop_map(|(h, g, x, s)| GcdConfig {
            hgcd_cutoff: h,
            gcd_cutoff: g,
            small_gcd_cutoff: g,
            xgcd_cutoff: x,
            strassen_cutoff: s,
            ..GcdConfig::default()
        })
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative((a, b) in pair(20)) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative((a, b) in pair(50)) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive((a, b, c) in triple(40)) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_eval_mul((a, b) in pair(20), x in any::<u64>()) {
            // (a * b)(x) = a(x) * b(x)
            let m = *a.modulus();
            prop_assert_eq!(a.mul(&b).eval(x), m.mul(a.eval(x), b.eval(x)));
        }

        #[test]
        fn poly_mul_degree((a, b) in pair(40)) {
            // Over a field, deg(a * b) = deg(a) + deg(b)
            prop_assume!(!a.is_zero() && !b.is_zero());
            let product = a.mul(&b);
            prop_assert_eq!(product.degree(), Some(a.len() + b.len() - 2));
        }

        #[test]
        fn karatsuba_matches_schoolbook((a, b) in pair(120)) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let mut expected = schoolbook_mul(a.coeffs(), b.coeffs(), a.modulus());
            crate::algorithms::field_ops::normalise_vec(&mut expected);
            let product = a.mul(&b);
            prop_assert_eq!(product.coeffs(), expected.as_slice());
        }

        #[test]
        fn div_rem_identity((a, b) in pair(60)) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.len() < b.len());
            prop_assert_eq!(q.mul(&b).add(&r), a);
        }

        // GCD family

        #[test]
        fn xgcd_bezout((a, b) in pair(60), config in config()) {
            let (g, s, t) = poly_xgcd_with_config(&a, &b, &config).unwrap();
            prop_assert_eq!(s.mul(&a).add(&t.mul(&b)), g.clone());
            if !g.is_zero() {
                prop_assert_eq!(g.leading_coeff(), Some(1));
            }
        }

        #[test]
        fn gcd_divides_both((a, b) in pair(60), config in config()) {
            let g = poly_gcd_with_config(&a, &b, &config).unwrap();
            if g.is_zero() {
                prop_assert!(a.is_zero() && b.is_zero());
            } else {
                prop_assert!(a.rem(&g).unwrap().is_zero());
                prop_assert!(b.rem(&g).unwrap().is_zero());
            }
        }

        #[test]
        fn gcd_algorithms_agree((a, b, c) in triple(40), config in config()) {
            // Plant a common factor so the gcd is usually non-trivial
            let (a, b) = (a.mul(&c), b.mul(&c));
            let expected = poly_gcd_euclidean(&a, &b).unwrap();
            prop_assert_eq!(poly_gcd_with_config(&a, &b, &config).unwrap(), expected.clone());
            let (g, _, _) = poly_xgcd_with_config(&a, &b, &config).unwrap();
            prop_assert_eq!(g, expected);
        }

        #[test]
        fn gcd_scaling_invariance((a, b) in pair(60), c in 1u64..251, config in config()) {
            let scaled = a.scale(c);
            prop_assert_eq!(
                poly_gcd_with_config(&scaled, &b, &config).unwrap(),
                poly_gcd_with_config(&a, &b, &config).unwrap()
            );
        }

        // Half-GCD

        #[test]
        fn hgcd_transform((a, b) in pair(80), config in config()) {
            prop_assume!(!a.is_zero());
            let b = b.rem(&a).unwrap();
            let res = a.half_gcd(&b, &config).unwrap();
            let [m0, m1, m2, m3] = &res.matrix;

            // (a, b) = M·(A, B) and det(M) = sign
            prop_assert_eq!(m0.mul(&res.a).add(&m1.mul(&res.b)), a.clone());
            prop_assert_eq!(m2.mul(&res.a).add(&m3.mul(&res.b)), b.clone());
            let det = m0.mul(m3).sub(&m1.mul(m2));
            let sign = NmodPoly::from_signed(&[i64::from(res.sign)], *a.modulus());
            prop_assert_eq!(det, sign);

            // The remainder has lost half of the length
            prop_assert!(res.b.len() <= a.len() / 2);
            prop_assert!(res.a.len() > a.len() / 2);
        }

        #[test]
        fn hgcd_in_place_matches((a, b) in pair(80), config in config()) {
            prop_assume!(!a.is_zero());
            let b = b.rem(&a).unwrap();
            let res = a.half_gcd(&b, &config).unwrap();

            let m = *a.modulus();
            let (mut x, mut y) = (a.coeffs().to_vec(), b.coeffs().to_vec());
            let sign = hgcd_in_place(None, &mut x, &mut y, &m, &config).unwrap();
            prop_assert_eq!(sign, res.sign);
            prop_assert_eq!(x.as_slice(), res.a.coeffs());
            prop_assert_eq!(y.as_slice(), res.b.coeffs());
        }
    }
}
