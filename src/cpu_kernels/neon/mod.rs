//! aarch64 NEON backend: `float32x4_t` (f32, width 4) and `float64x2_t`
//! (f64, width 2). NEON is baseline on aarch64, so no runtime check guards
//! these paths.
//!
//! NEON has no fused multiply-add/subtract, so `complex_mul` applies a
//! (−1, +1) sign vector to the cross term before a single `vfmaq`, which
//! keeps the subtract-on-even/add-on-odd shape of the AVX pattern.

#![cfg(target_arch = "aarch64")]

use std::arch::aarch64::*;

use num_complex::Complex;

use crate::traits::{ComplexPack, PackOf};


impl PackOf<4> for f32 {
    type Pack = float32x4_t;
}

impl PackOf<2> for f64 {
    type Pack = float64x2_t;
}

impl ComplexPack for float32x4_t {
    type Scalar = f32;

    const COMPLEX_PER_PACK: usize = 2;
    const SCALARS_PER_PACK: usize = 4;

    #[inline(always)]
    unsafe fn zero() -> Self {
        vdupq_n_f32(0.0)
    }

    #[inline(always)]
    unsafe fn load(src: *const f32) -> Self {
        vld1q_f32(src)
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut f32) {
        vst1q_f32(dst, self)
    }

    #[inline(always)]
    unsafe fn pair_set(re: f32, im: f32) -> Self {
        let vals = [re, im, re, im];
        vld1q_f32(vals.as_ptr())
    }

    #[inline(always)]
    unsafe fn set1(value: f32) -> Self {
        vdupq_n_f32(value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<f32>, stride: usize) -> Self {
        let z0 = *src;
        let z1 = *src.add(stride);
        let vals = [z0.re, z0.im, z1.re, z1.im];
        vld1q_f32(vals.as_ptr())
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        vaddq_f32(self, rhs)
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        vsubq_f32(self, rhs)
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        vmulq_f32(self, rhs)
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        vdivq_f32(self, rhs)
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        let cc = vtrn1q_f32(rhs, rhs);
        let dd = vtrn2q_f32(rhs, rhs);
        let ba = vrev64q_f32(self);
        let dba = vmulq_f32(ba, dd);
        let sign = [-1.0f32, 1.0, -1.0, 1.0];
        let signed_dba = vmulq_f32(dba, vld1q_f32(sign.as_ptr()));
        vfmaq_f32(signed_dba, self, cc)
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        let mask = [0u32, 0x8000_0000, 0, 0x8000_0000];
        vreinterpretq_f32_u32(veorq_u32(
            vreinterpretq_u32_f32(self),
            vld1q_u32(mask.as_ptr()),
        ))
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        let sq = vmulq_f32(self, self);
        // [s0, s1, s0, s1] -> zip with itself -> [s0, s0, s1, s1]
        let sums = vpaddq_f32(sq, sq);
        vzip1q_f32(sums, sums)
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        vsqrtq_f32(self.complex_sq_mod())
    }
}

impl ComplexPack for float64x2_t {
    type Scalar = f64;

    const COMPLEX_PER_PACK: usize = 1;
    const SCALARS_PER_PACK: usize = 2;

    #[inline(always)]
    unsafe fn zero() -> Self {
        vdupq_n_f64(0.0)
    }

    #[inline(always)]
    unsafe fn load(src: *const f64) -> Self {
        vld1q_f64(src)
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut f64) {
        vst1q_f64(dst, self)
    }

    #[inline(always)]
    unsafe fn pair_set(re: f64, im: f64) -> Self {
        let vals = [re, im];
        vld1q_f64(vals.as_ptr())
    }

    #[inline(always)]
    unsafe fn set1(value: f64) -> Self {
        vdupq_n_f64(value)
    }

    #[inline(always)]
    unsafe fn complex_load_strided(src: *const Complex<f64>, _stride: usize) -> Self {
        let z = *src;
        let vals = [z.re, z.im];
        vld1q_f64(vals.as_ptr())
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        vaddq_f64(self, rhs)
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        vsubq_f64(self, rhs)
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        vmulq_f64(self, rhs)
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        vdivq_f64(self, rhs)
    }

    #[inline(always)]
    unsafe fn complex_mul(self, rhs: Self) -> Self {
        let cc = vdupq_laneq_f64::<0>(rhs);
        let dd = vdupq_laneq_f64::<1>(rhs);
        let ba = vextq_f64::<1>(self, self);
        let dba = vmulq_f64(ba, dd);
        let sign = [-1.0f64, 1.0];
        let signed_dba = vmulq_f64(dba, vld1q_f64(sign.as_ptr()));
        vfmaq_f64(signed_dba, self, cc)
    }

    #[inline(always)]
    unsafe fn complex_conj(self) -> Self {
        let mask = [0u64, 0x8000_0000_0000_0000];
        vreinterpretq_f64_u64(veorq_u64(
            vreinterpretq_u64_f64(self),
            vld1q_u64(mask.as_ptr()),
        ))
    }

    #[inline(always)]
    unsafe fn complex_sq_mod(self) -> Self {
        let sq = vmulq_f64(self, self);
        vpaddq_f64(sq, sq)
    }

    #[inline(always)]
    unsafe fn complex_mod(self) -> Self {
        vsqrtq_f64(self.complex_sq_mod())
    }
}
