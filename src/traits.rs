//! Core traits: precision classification, the `ComplexPack` operation set,
//! and the (precision, width) → register resolver.
//!
//! Compile-time monomorphization, zero runtime overhead: every pack operation
//! lowers to a handful of intrinsics (or plain float ops at width 1) with no
//! dispatch in the hot path.

use std::fmt::Debug;

use num_complex::Complex;
use num_traits::{Float, FromPrimitive};

mod sealed {
    use num_complex::Complex;

    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for Complex<f32> {}
    impl Sealed for Complex<f64> {}
}

/// Numeric classification of a supported element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericClass {
    Real32,
    Real64,
    Complex32,
    Complex64,
}

impl NumericClass {
    pub fn is_real(self) -> bool {
        matches!(self, NumericClass::Real32 | NumericClass::Real64)
    }

    pub fn is_complex(self) -> bool {
        !self.is_real()
    }
}

/// Compile-time membership in the supported numeric universe.
///
/// Implemented for exactly `f32`, `f64`, `Complex<f32>` and `Complex<f64>`;
/// the trait is sealed, so any other element type fails to resolve at compile
/// time rather than falling through to a runtime check.
pub trait Classified: sealed::Sealed {
    const CLASS: NumericClass;
}

impl Classified for f32 {
    const CLASS: NumericClass = NumericClass::Real32;
}

impl Classified for f64 {
    const CLASS: NumericClass = NumericClass::Real64;
}

impl Classified for Complex<f32> {
    const CLASS: NumericClass = NumericClass::Complex32;
}

impl Classified for Complex<f64> {
    const CLASS: NumericClass = NumericClass::Complex64;
}

/// A real floating-point precision a pack can be built over: `f32` or `f64`.
pub trait Precision:
    Classified + Float + FromPrimitive + Debug + Default + Send + Sync + 'static
{
}

impl Precision for f32 {}
impl Precision for f64 {}

/// A SIMD register (or the width-1 scalar stand-in) holding complex numbers
/// with real and imaginary values interleaved.
///
/// Packs are transient `Copy` values: created by `zero`/`load`/set-style
/// constructors, transformed by pure operations, consumed by `store` or by
/// going out of scope. Consumers never index into a pack directly.
///
/// Every method is `unsafe`: the intrinsic-backed implementations require the
/// matching ISA extension to be present on the running CPU (callers select a
/// width once via [`get_isa_level`](crate::cpu_kernels::get_isa_level)), and
/// the load/store family dereferences raw pointers whose extent only the
/// caller can guarantee.
pub trait ComplexPack: Copy + Debug {
    type Scalar: Precision;

    /// Complex numbers processed per call.
    const COMPLEX_PER_PACK: usize;
    /// Primitive float slots in the pack; always `2 * COMPLEX_PER_PACK`.
    const SCALARS_PER_PACK: usize;

    /// Pack with every primitive slot zero.
    unsafe fn zero() -> Self;

    /// Read `SCALARS_PER_PACK` contiguous primitives starting at `src`.
    /// No alignment requirement.
    unsafe fn load(src: *const Self::Scalar) -> Self;

    /// Write `SCALARS_PER_PACK` primitives back to `dst`.
    unsafe fn store(self, dst: *mut Self::Scalar);

    /// Replicate the pair `(re, im)` into every complex slot, the broadcast
    /// used to spread one twiddle factor across a whole pack.
    unsafe fn pair_set(re: Self::Scalar, im: Self::Scalar) -> Self;

    /// Fill every primitive slot (real and imaginary alike) with `value`.
    unsafe fn set1(value: Self::Scalar) -> Self;

    /// Gather `COMPLEX_PER_PACK` complex numbers where consecutive numbers
    /// sit `stride` complex elements apart, as arises along a non-unit
    /// tensor stride in multi-dimensional transform layouts.
    unsafe fn complex_load_strided(src: *const Complex<Self::Scalar>, stride: usize) -> Self;

    /// [`complex_load_strided`](Self::complex_load_strided) with unit stride.
    #[inline(always)]
    unsafe fn complex_load(src: *const Complex<Self::Scalar>) -> Self {
        Self::complex_load_strided(src, 1)
    }

    /// Slot-wise addition.
    unsafe fn add(self, rhs: Self) -> Self;

    /// Slot-wise subtraction.
    unsafe fn sub(self, rhs: Self) -> Self;

    /// Real-coefficient scaling, *not* complex multiplication.
    ///
    /// At width 1 this scales `self` by `rhs.re` only; at wider widths it is
    /// slot-wise real multiplication, consistent with a coefficient pack
    /// built by [`set1`](Self::set1) or [`pair_set`](Self::pair_set). The
    /// surrounding transform relies on this asymmetry for real-valued
    /// scaling; true complex products go through
    /// [`complex_mul`](Self::complex_mul).
    unsafe fn mul(self, rhs: Self) -> Self;

    /// Real-coefficient division; same asymmetric contract as
    /// [`mul`](Self::mul).
    unsafe fn div(self, rhs: Self) -> Self;

    /// Full complex product, every complex slot in one call.
    unsafe fn complex_mul(self, rhs: Self) -> Self;

    /// Negate the imaginary slots; bit-exact, no rounding.
    unsafe fn complex_conj(self) -> Self;

    /// `Re² + Im²` per complex slot. At widths > 1 the value is broadcast
    /// into both slots of its complex number so it can feed
    /// [`div`](Self::div) directly; at width 1 it lands in the real slot,
    /// which is all width-1 `div` reads.
    unsafe fn complex_sq_mod(self) -> Self;

    /// Slot-wise square root of [`complex_sq_mod`](Self::complex_sq_mod).
    unsafe fn complex_mod(self) -> Self;

    /// Complex division via multiply-by-conjugate over the squared modulus.
    /// A zero-modulus divisor propagates IEEE infinities/NaNs; that is the
    /// numeric contract, not a fault.
    #[inline(always)]
    unsafe fn complex_div(self, rhs: Self) -> Self {
        self.complex_mul(rhs.complex_conj()).div(rhs.complex_sq_mod())
    }
}

/// Resolver from a (precision, width) pair to its one concrete register type
/// on the current build target.
///
/// `WIDTH` counts primitive float lanes (width 1 denotes the native complex
/// scalar). The mapping is total, unique and fixed per target; a pair with no
/// impl (`f64` at width 8 without a 512-bit ISA, or any vector width on a
/// target without the backing extension) is a compile error by construction,
/// never a silent scalar fallback:
///
/// ```compile_fail
/// use fft_kernels::PackOf;
///
/// // No 512-bit register is mapped, so f64 at width 8 must not resolve.
/// // (A signature forces the projection; a bare alias would not.)
/// fn widest(_: <f64 as PackOf<8>>::Pack) {}
/// ```
pub trait PackOf<const WIDTH: usize>: Precision {
    type Pack: ComplexPack<Scalar = Self>;
}
