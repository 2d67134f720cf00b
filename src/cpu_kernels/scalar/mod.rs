//! Width-1 baseline: one complex number per pack, on any target.
//!
//! This is the numerically authoritative reference implementation the vector
//! backends are validated against, and the remainder path for buffers that
//! are not a multiple of a vector width. Note the `mul`/`div` contract: at
//! width 1 the right-hand side acts as a real coefficient through its real
//! component only.

use num_complex::Complex;

use crate::traits::{ComplexPack, PackOf, Precision};

impl PackOf<1> for f32 {
    type Pack = Complex<f32>;
}

impl PackOf<1> for f64 {
    type Pack = Complex<f64>;
}

impl<F: Precision> ComplexPack for Complex<F> {
    type Scalar = F;

    const COMPLEX_PER_PACK: usize = 1;
    const SCALARS_PER_PACK: usize = 2;

    // Complex::zero() would be ambiguous with the `zero` being defined here.
    #[inline(always)]
    unsafe fn zero() -> Self {
        Complex::new(F::zero(), F::zero())
    }

    #[inline(always)]
    unsafe fn load(src: *const F) -> Self {
        Complex::new(*src, *src.add(1))
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut F) {
        *dst = self.re;
        *dst.add(1) = self.im;
    }

    #[inline(always)]
    unsafe fn pair_set(re: F, im: F) -> Self {
        Complex::new(re, im)
    }

    #[inline(always)]
    unsafe fn set1(value: F) -> Self {
        Complex::new(value, value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<F>, _stride: usize) -> Self {
        *src
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    // Real-coefficient scaling: only rhs.re participates.
    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        self * rhs.re
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        self / rhs.re
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        self.conj()
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        Complex::new(self.norm_sqr(), F::zero())
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        Complex::new(self.norm(), F::zero())
    }

    #[inline(always)]
    unsafe fn complex_div(self, rhs: Self) -> Self {
        self / rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_clears_both_slots() {
        unsafe {
            let z32 = <Complex<f32> as ComplexPack>::zero();
            assert_eq!(z32, Complex::new(0.0, 0.0));
            let z64 = <Complex<f64> as ComplexPack>::zero();
            assert_eq!(z64, Complex::new(0.0, 0.0));
        }
    }

    #[test]
    fn mul_scales_by_real_component_only() {
        // Distinct from complex_mul: (1+2i) * Re(3+99i) = 3+6i.
        let a = Complex::new(1.0f64, 2.0);
        let b = Complex::new(3.0f64, 99.0);
        unsafe {
            // `mul` collides with `std::ops::Mul` on Complex; disambiguate.
            assert_eq!(ComplexPack::mul(a, b), Complex::new(3.0, 6.0));
            assert_eq!(a.complex_mul(b), Complex::new(1.0 * 3.0 - 2.0 * 99.0, 99.0 + 6.0));
        }
    }

    #[test]
    fn div_scales_by_real_component_only() {
        let a = Complex::new(8.0f32, -4.0);
        let b = Complex::new(2.0f32, 1e6);
        unsafe {
            assert_eq!(ComplexPack::div(a, b), Complex::new(4.0, -2.0));
        }
    }

    #[test]
    fn sq_mod_lands_in_real_slot() {
        let a = Complex::new(3.0f64, 4.0);
        unsafe {
            assert_eq!(a.complex_sq_mod(), Complex::new(25.0, 0.0));
            assert_eq!(a.complex_mod(), Complex::new(5.0, 0.0));
        }
    }

    #[test]
    fn complex_div_matches_native_division() {
        let a = Complex::new(1.0f64, 2.0);
        let b = Complex::new(3.0f64, -4.0);
        unsafe {
            let q = a.complex_div(b);
            let expect = a / b;
            assert!((q - expect).norm() < 1e-15);
        }
    }

    #[test]
    fn zero_modulus_divisor_propagates_nan() {
        let a = Complex::new(1.0f64, 1.0);
        let b = Complex::new(0.0f64, 0.0);
        unsafe {
            let q = a.complex_div(b);
            assert!(q.re.is_nan() || q.re.is_infinite());
        }
    }
}
