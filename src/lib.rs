//! fft-kernels: complex-pack SIMD primitives for FFT butterflies.
//!
//! This crate is the numeric kernel underneath an FFT engine. It presents one
//! uniform operation set (load, store, broadcast, add/sub, real-coefficient
//! scaling, complex multiply/divide/conjugate/modulus) over a *pack* of
//! complex numbers, where the (precision, width) pair selects a concrete
//! hardware register at compile time:
//!
//! | Precision | Baseline | AVX+FMA (x86_64) | NEON (aarch64) |
//! |-----------|----------|------------------|----------------|
//! | `f32`     | width 1  | width 4, 8       | width 4        |
//! | `f64`     | width 1  | width 2, 4       | width 2        |
//!
//! Width counts the register's primitive float lanes; each complex number
//! occupies two adjacent lanes (real, imaginary). Width 1 is the portable
//! scalar baseline on [`num_complex::Complex`] and is always available; it is
//! the numerically authoritative reference every vector backend is validated
//! against. A (precision, width) pair with no backing register on the build
//! target is simply an unresolved [`PackOf`] instantiation: a compile error,
//! never a silent scalar fallback.
//!
//! # Quick Start
//!
//! ```
//! use fft_kernels::{ComplexPack, PackOf};
//!
//! let src = [1.0f64, 2.0, 3.0, 4.0];
//! let mut dst = [0.0f64; 4];
//! // Width-1 packs process one complex number per call on any target.
//! unsafe {
//!     let a = <f64 as PackOf<1>>::Pack::load(src.as_ptr());
//!     let b = <f64 as PackOf<1>>::Pack::load(src.as_ptr().add(2));
//!     a.complex_mul(b).store(dst.as_mut_ptr());
//! }
//! assert_eq!(&dst[..2], &[-5.0, 10.0]);
//! ```
//!
//! Callers pick a width specialization once, from
//! [`get_isa_level`](cpu_kernels::get_isa_level), and handle remainder
//! elements through the width-1 path. All operations are pure value
//! transforms: no heap, no shared state, safe to call from any thread.

pub mod cpu_kernels;
pub mod traits;

pub use cpu_kernels::{get_isa_level, IsaLevel};
pub use traits::{Classified, ComplexPack, NumericClass, PackOf, Precision};
