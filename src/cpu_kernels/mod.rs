//! Per-ISA pack backends and runtime ISA level detection.
//!
//! Each submodule implements [`ComplexPack`](crate::traits::ComplexPack) and
//! registers its widths with [`PackOf`](crate::traits::PackOf):
//!
//! - `scalar`: width-1 baseline on `num_complex::Complex`, every target.
//! - `avx`: x86_64 AVX+FMA: `__m128`/`__m256` (f32), `__m128d`/`__m256d` (f64).
//! - `neon`: aarch64 NEON: `float32x4_t` (f32), `float64x2_t` (f64).
//!
//! Detection runs once and is cached; the transform driver queries it a
//! single time to pick which width specialization to instantiate, then the
//! hot path is branch-free monomorphized code.

use std::sync::OnceLock;

pub mod avx;
pub mod neon;
pub mod scalar;

/// Widest complex-pack ISA available on the running CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsaLevel {
    Scalar,
    /// AVX with FMA (the fused multiply-add/subtract pattern in
    /// `complex_mul` needs both).
    Avx,
    Neon,
}

impl IsaLevel {
    /// Widest supported f32 pack width at this level.
    pub fn f32_width(self) -> usize {
        match self {
            IsaLevel::Scalar => 1,
            IsaLevel::Avx => 8,
            IsaLevel::Neon => 4,
        }
    }

    /// Widest supported f64 pack width at this level.
    pub fn f64_width(self) -> usize {
        match self {
            IsaLevel::Scalar => 1,
            IsaLevel::Avx => 4,
            IsaLevel::Neon => 2,
        }
    }
}

static ISA_LEVEL: OnceLock<IsaLevel> = OnceLock::new();

/// Detected ISA level, computed on first call and cached for the process.
pub fn get_isa_level() -> IsaLevel {
    *ISA_LEVEL.get_or_init(|| {
        let level = detect_isa_features();
        log::debug!(
            "detected ISA level {:?} (f32 width {}, f64 width {})",
            level,
            level.f32_width(),
            level.f64_width()
        );
        level
    })
}

#[cfg(target_arch = "x86_64")]
fn detect_isa_features() -> IsaLevel {
    if is_x86_feature_detected!("avx") && is_x86_feature_detected!("fma") {
        IsaLevel::Avx
    } else {
        IsaLevel::Scalar
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_isa_features() -> IsaLevel {
    // NEON is baseline on aarch64.
    IsaLevel::Neon
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Scalar
}
