//! Property-based tests over the width-1 baseline, which defines the
//! mathematics every vector specialization must reproduce:
//! - complex_div inverts complex_mul away from zero-modulus divisors
//! - complex_conj is a bit-exact involution
//! - complex_sq_mod agrees with complex_mod squared
//! - mul/div scale by the real component only

use num_complex::Complex;
use proptest::prelude::*;

use fft_kernels::ComplexPack;

fn finite_component() -> impl Strategy<Value = f64> {
    -1e6f64..1e6
}

proptest! {
    #[test]
    fn div_inverts_mul(
        ar in finite_component(),
        ai in finite_component(),
        br in finite_component(),
        bi in finite_component(),
    ) {
        let a = Complex::new(ar, ai);
        let b = Complex::new(br, bi);
        prop_assume!(b.norm_sqr() > 1e-6);
        let back = unsafe { a.complex_mul(b).complex_div(b) };
        let scale = 1.0 + a.norm();
        prop_assert!(
            (back - a).norm() <= 1e-9 * scale,
            "{} -> {} (divisor {})", a, back, b
        );
    }

    #[test]
    fn conj_is_bit_exact_involution(re in finite_component(), im in finite_component()) {
        let a = Complex::new(re, im);
        let round = unsafe { a.complex_conj().complex_conj() };
        prop_assert_eq!(a.re.to_bits(), round.re.to_bits());
        prop_assert_eq!(a.im.to_bits(), round.im.to_bits());
        // One application flips exactly the imaginary sign bit.
        let once = unsafe { a.complex_conj() };
        prop_assert_eq!(once.re.to_bits(), a.re.to_bits());
        prop_assert_eq!(once.im.to_bits(), a.im.to_bits() ^ (1u64 << 63));
    }

    #[test]
    fn sq_mod_is_mod_squared(re in finite_component(), im in finite_component()) {
        let a = Complex::new(re, im);
        let (sq, m) = unsafe { (a.complex_sq_mod(), a.complex_mod()) };
        prop_assert!((sq.re - m.re * m.re).abs() <= 1e-9 * (1.0 + sq.re));
        prop_assert_eq!(sq.im, 0.0);
        prop_assert_eq!(m.im, 0.0);
    }

    #[test]
    fn mul_uses_real_component_only(
        ar in finite_component(),
        ai in finite_component(),
        br in finite_component(),
        bi in finite_component(),
    ) {
        let a = Complex::new(ar, ai);
        let b = Complex::new(br, bi);
        let scaled = unsafe { ComplexPack::mul(a, b) };
        prop_assert_eq!(scaled, Complex::new(ar * br, ai * br));
        // bi must have no influence at all.
        let scaled2 = unsafe { ComplexPack::mul(a, Complex::new(br, -bi)) };
        prop_assert_eq!(scaled.re.to_bits(), scaled2.re.to_bits());
        prop_assert_eq!(scaled.im.to_bits(), scaled2.im.to_bits());
    }

    #[test]
    fn div_uses_real_component_only(
        ar in finite_component(),
        ai in finite_component(),
        br in finite_component(),
        bi in finite_component(),
    ) {
        prop_assume!(br.abs() > 1e-6);
        let a = Complex::new(ar, ai);
        let q = unsafe { ComplexPack::div(a, Complex::new(br, bi)) };
        prop_assert_eq!(q, Complex::new(ar / br, ai / br));
    }
}
