//! x86_64 AVX+FMA backend.
//!
//! Four register types, one per (precision, width) pair:
//! `__m128` (f32, width 4), `__m256` (f32, width 8), `__m128d` (f64, width 2),
//! `__m256d` (f64, width 4). Callers must have confirmed AVX and FMA once via
//! [`get_isa_level`](crate::cpu_kernels::get_isa_level) before touching these;
//! the methods themselves do no detection.
//!
//! The complex multiply follows the permute/fmaddsub pattern: with each lane
//! pair of `a` as (a, b) and of `rhs` as (c, d), build `cc` (real components
//! of rhs duplicated), `ba` (a with slots swapped), `dd` (imaginary components
//! duplicated), then `fmaddsub(a, cc, ba * dd)` yields (ac − bd, bc + ad).

#![cfg(target_arch = "x86_64")]

use std::arch::x86_64::*;

use num_complex::Complex;

use crate::traits::{ComplexPack, PackOf};


impl PackOf<4> for f32 {
    type Pack = __m128;
}

impl PackOf<8> for f32 {
    type Pack = __m256;
}

impl PackOf<2> for f64 {
    type Pack = __m128d;
}

impl PackOf<4> for f64 {
    type Pack = __m256d;
}

impl ComplexPack for __m128 {
    type Scalar = f32;

    const COMPLEX_PER_PACK: usize = 2;
    const SCALARS_PER_PACK: usize = 4;

    #[inline(always)]
    unsafe fn zero() -> Self {
        _mm_setzero_ps()
    }

    #[inline(always)]
    unsafe fn load(src: *const f32) -> Self {
        _mm_loadu_ps(src)
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut f32) {
        _mm_storeu_ps(dst, self)
    }

    #[inline(always)]
    unsafe fn pair_set(re: f32, im: f32) -> Self {
        _mm_setr_ps(re, im, re, im)
    }

    #[inline(always)]
    unsafe fn set1(value: f32) -> Self {
        _mm_set1_ps(value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<f32>, stride: usize) -> Self {
        let z0 = *src;
        let z1 = *src.add(stride);
        _mm_setr_ps(z0.re, z0.im, z1.re, z1.im)
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        _mm_add_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        _mm_sub_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        _mm_mul_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        _mm_div_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        let cc = _mm_permute_ps(rhs, 0b1010_0000);
        let ba = _mm_permute_ps(self, 0b1011_0001);
        let dd = _mm_permute_ps(rhs, 0b1111_0101);
        let dba = _mm_mul_ps(ba, dd);
        _mm_fmaddsub_ps(self, cc, dba)
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        // Flip the sign bit of the imaginary slots; bit exact.
        _mm_xor_ps(self, _mm_setr_ps(0.0, -0.0, 0.0, -0.0))
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        // Each dot product sums one lane pair and broadcasts into that pair.
        _mm_or_ps(
            _mm_dp_ps(self, self, 0b1100_1100),
            _mm_dp_ps(self, self, 0b0011_0011),
        )
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        _mm_sqrt_ps(self.complex_sq_mod())
    }
}

impl ComplexPack for __m256 {
    type Scalar = f32;

    const COMPLEX_PER_PACK: usize = 4;
    const SCALARS_PER_PACK: usize = 8;

    #[inline(always)]
    unsafe fn zero() -> Self {
        _mm256_setzero_ps()
    }

    #[inline(always)]
    unsafe fn load(src: *const f32) -> Self {
        _mm256_loadu_ps(src)
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut f32) {
        _mm256_storeu_ps(dst, self)
    }

    #[inline(always)]
    unsafe fn pair_set(re: f32, im: f32) -> Self {
        _mm256_setr_ps(re, im, re, im, re, im, re, im)
    }

    #[inline(always)]
    unsafe fn set1(value: f32) -> Self {
        _mm256_set1_ps(value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<f32>, stride: usize) -> Self {
        let z0 = *src;
        let z1 = *src.add(stride);
        let z2 = *src.add(2 * stride);
        let z3 = *src.add(3 * stride);
        _mm256_setr_ps(z0.re, z0.im, z1.re, z1.im, z2.re, z2.im, z3.re, z3.im)
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        _mm256_add_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        _mm256_sub_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        _mm256_mul_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        _mm256_div_ps(self, rhs)
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        let cc = _mm256_permute_ps(rhs, 0b1010_0000);
        let ba = _mm256_permute_ps(self, 0b1011_0001);
        let dd = _mm256_permute_ps(rhs, 0b1111_0101);
        let dba = _mm256_mul_ps(ba, dd);
        _mm256_fmaddsub_ps(self, cc, dba)
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        _mm256_xor_ps(
            self,
            _mm256_setr_ps(0.0, -0.0, 0.0, -0.0, 0.0, -0.0, 0.0, -0.0),
        )
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        // _mm256_dp_ps works within each 128-bit half, which is exactly the
        // per-lane-pair reduction needed here.
        _mm256_or_ps(
            _mm256_dp_ps(self, self, 0b1100_1100),
            _mm256_dp_ps(self, self, 0b0011_0011),
        )
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        _mm256_sqrt_ps(self.complex_sq_mod())
    }
}

impl ComplexPack for __m128d {
    type Scalar = f64;

    const COMPLEX_PER_PACK: usize = 1;
    const SCALARS_PER_PACK: usize = 2;

    #[inline(always)]
    unsafe fn zero() -> Self {
        _mm_setzero_pd()
    }

    #[inline(always)]
    unsafe fn load(src: *const f64) -> Self {
        _mm_loadu_pd(src)
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut f64) {
        _mm_storeu_pd(dst, self)
    }

    #[inline(always)]
    unsafe fn pair_set(re: f64, im: f64) -> Self {
        _mm_setr_pd(re, im)
    }

    #[inline(always)]
    unsafe fn set1(value: f64) -> Self {
        _mm_set1_pd(value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<f64>, _stride: usize) -> Self {
        let z = *src;
        _mm_setr_pd(z.re, z.im)
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        _mm_add_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        _mm_sub_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        _mm_mul_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        _mm_div_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        let cc = _mm_permute_pd(rhs, 0b00);
        let ba = _mm_permute_pd(self, 0b01);
        let dd = _mm_permute_pd(rhs, 0b11);
        let dba = _mm_mul_pd(ba, dd);
        _mm_fmaddsub_pd(self, cc, dba)
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        _mm_xor_pd(self, _mm_setr_pd(0.0, -0.0))
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        _mm_dp_pd(self, self, 0b1111_1111)
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        _mm_sqrt_pd(self.complex_sq_mod())
    }
}

impl ComplexPack for __m256d {
    type Scalar = f64;

    const COMPLEX_PER_PACK: usize = 2;
    const SCALARS_PER_PACK: usize = 4;

    #[inline(always)]
    unsafe fn zero() -> Self {
        _mm256_setzero_pd()
    }

    #[inline(always)]
    unsafe fn load(src: *const f64) -> Self {
        _mm256_loadu_pd(src)
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut f64) {
        _mm256_storeu_pd(dst, self)
    }

    #[inline(always)]
    unsafe fn pair_set(re: f64, im: f64) -> Self {
        _mm256_setr_pd(re, im, re, im)
    }

    #[inline(always)]
    unsafe fn set1(value: f64) -> Self {
        _mm256_set1_pd(value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<f64>, stride: usize) -> Self {
        let z0 = *src;
        let z1 = *src.add(stride);
        _mm256_setr_pd(z0.re, z0.im, z1.re, z1.im)
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        _mm256_add_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        _mm256_sub_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        _mm256_mul_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        _mm256_div_pd(self, rhs)
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        let cc = _mm256_permute_pd(rhs, 0b0000);
        let ba = _mm256_permute_pd(self, 0b0101);
        let dd = _mm256_permute_pd(rhs, 0b1111);
        let dba = _mm256_mul_pd(ba, dd);
        _mm256_fmaddsub_pd(self, cc, dba)
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        _mm256_xor_pd(self, _mm256_setr_pd(0.0, -0.0, 0.0, -0.0))
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        // No 256-bit double dot product; square then horizontal-add, which
        // already broadcasts within each lane pair.
        let sq = _mm256_mul_pd(self, self);
        _mm256_hadd_pd(sq, sq)
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        _mm256_sqrt_pd(self.complex_sq_mod())
    }
}
