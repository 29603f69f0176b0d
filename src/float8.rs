//! 8-lane `f32` vector with a compile-time selected backend
//!
//! `Float8` is a plain 32-byte aligned value. Arithmetic that has a native
//! 256-bit instruction goes through `backends::ActiveBackend` (AVX2 when the
//! build enables it, the portable scalar loop otherwise). Transcendentals,
//! safe division and finiteness checks are lane-mapped through
//! `crate::math` on every build.
//!
//! # Examples
//!
//! ```
//! use spectral_svm::Float8;
//!
//! let a = Float8::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! let b = a * 2.0 - 1.0;
//!
//! assert_eq!(b.to_array(), [1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0]);
//! assert_eq!(a.reduce_add_f(), 36.0);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::backends::{ActiveBackend, Float8Backend};
use crate::{math, Backend};

/// Number of lanes in a `Float8`
pub const LANES: usize = 8;

/// Eight packed `f32` lanes
#[derive(Debug, Clone, Copy, Default)]
#[repr(C, align(32))]
pub struct Float8 {
    lanes: [f32; LANES],
}

impl Float8 {
    /// Create from eight lane values
    #[inline]
    pub const fn new(lanes: [f32; LANES]) -> Self {
        Self { lanes }
    }

    /// Broadcast `f` to every lane
    #[inline]
    pub const fn splat(f: f32) -> Self {
        Self { lanes: [f; LANES] }
    }

    /// All lanes `0.0`
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// All lanes `1.0`
    #[inline]
    pub const fn one() -> Self {
        Self::splat(1.0)
    }

    /// Read eight consecutive floats
    ///
    /// # Panics
    ///
    /// Panics if `v` holds fewer than eight elements.
    #[inline]
    pub fn load(v: &[f32]) -> Self {
        let mut lanes = [0.0; LANES];
        lanes.copy_from_slice(&v[..LANES]);
        Self { lanes }
    }

    /// Write the eight lanes to the front of `v`
    ///
    /// # Panics
    ///
    /// Panics if `v` holds fewer than eight elements.
    #[inline]
    pub fn store(self, v: &mut [f32]) {
        v[..LANES].copy_from_slice(&self.lanes);
    }

    #[inline]
    pub const fn to_array(self) -> [f32; LANES] {
        self.lanes
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const f32 {
        self.lanes.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut f32 {
        self.lanes.as_mut_ptr()
    }

    /// Code path this build uses for the hardware-backed operations
    pub const fn backend() -> Backend {
        crate::active_backend()
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(self.lanes.map(f))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(std::array::from_fn(|i| f(self.lanes[i], other.lanes[i])))
    }

    /// Fast reciprocal
    ///
    /// On the AVX2 path this is a hardware estimate with relative error at
    /// most `1.5 * 2^-12`. The portable path computes `1 / x` exactly.
    #[inline]
    pub fn rcp(self) -> Self {
        // SAFETY: ActiveBackend is AVX2 only when the build enables avx2
        unsafe { ActiveBackend::rcp(self) }
    }

    /// Exact reciprocal with `0` for zero lanes, on every path
    #[inline]
    pub fn safe_rcp(self) -> Self {
        self.map(math::safe_rcp)
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::sqrt(self) }
    }

    /// `self * self`
    #[inline]
    pub fn sqr(self) -> Self {
        self * self
    }

    #[inline]
    pub fn fabs(self) -> Self {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::fabs(self) }
    }

    #[inline]
    pub fn floor(self) -> Self {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::floor(self) }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::min(self, other) }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::max(self, other) }
    }

    /// `min(max(self, mn), mx)`
    #[inline]
    pub fn clamp(self, mn: Self, mx: Self) -> Self {
        self.max(mn).min(mx)
    }

    /// Clamp every lane to `[0, 1]`
    #[inline]
    pub fn saturate(self) -> Self {
        self.clamp(Self::zero(), Self::one())
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.map(f32::sin)
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.map(f32::cos)
    }

    #[inline]
    pub fn tan(self) -> Self {
        self.map(f32::tan)
    }

    #[inline]
    pub fn exp(self) -> Self {
        self.map(f32::exp)
    }

    #[inline]
    pub fn expm1(self) -> Self {
        self.map(f32::exp_m1)
    }

    /// Natural logarithm
    #[inline]
    pub fn log(self) -> Self {
        self.map(f32::ln)
    }

    /// Lane-wise power; a scalar exponent is broadcast
    #[inline]
    pub fn pow(self, e: impl Into<Self>) -> Self {
        self.zip(e.into(), f32::powf)
    }

    /// `self + t * (b - self)`
    #[inline]
    pub fn mix(self, b: Self, t: f32) -> Self {
        self + t * (b - self)
    }

    /// Minimum lane broadcast to all lanes
    #[inline]
    pub fn reduce_min(self) -> Self {
        let v = self.lanes;
        Self::splat(math::min(
            math::min(math::min(v[0], v[1]), math::min(v[2], v[3])),
            math::min(math::min(v[4], v[5]), math::min(v[6], v[7])),
        ))
    }

    /// Maximum lane broadcast to all lanes
    #[inline]
    pub fn reduce_max(self) -> Self {
        let v = self.lanes;
        Self::splat(math::max(
            math::max(math::max(v[0], v[1]), math::max(v[2], v[3])),
            math::max(math::max(v[4], v[5]), math::max(v[6], v[7])),
        ))
    }

    /// Lane sum broadcast to all lanes
    #[inline]
    pub fn reduce_add(self) -> Self {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::reduce_add(self) }
    }

    #[inline]
    pub fn reduce_min_f(self) -> f32 {
        self.reduce_min().lanes[0]
    }

    #[inline]
    pub fn reduce_max_f(self) -> f32 {
        self.reduce_max().lanes[0]
    }

    #[inline]
    pub fn reduce_add_f(self) -> f32 {
        self.reduce_add().lanes[0]
    }

    /// Mean of the eight lanes
    #[inline]
    pub fn average(self) -> f32 {
        self.reduce_add_f() / LANES as f32
    }

    /// Sum of the eight lane products
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        // SAFETY: see `rcp`
        unsafe { ActiveBackend::dot(self, other) }
    }

    /// True when every lane equals `0.0`
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Same as `==`
    #[inline]
    pub fn isequal(self, other: Self) -> bool {
        self == other
    }

    /// Lane-wise division with `0` wherever the denominator lane is `0`
    ///
    /// A scalar denominator is broadcast first.
    #[inline]
    pub fn safe_divide(self, b: impl Into<Self>) -> Self {
        self.zip(b.into(), math::safe_divide)
    }

    /// `average(safe_divide(self, b))`
    #[inline]
    pub fn safe_divide_even(self, b: impl Into<Self>) -> f32 {
        self.safe_divide(b).average()
    }

    /// Replace every non-finite lane with the scalar `ensure_finite` value
    #[inline]
    pub fn ensure_finite(self) -> Self {
        self.map(math::ensure_finite)
    }

    /// True when no lane is NaN or infinite
    #[inline]
    pub fn isfinite_safe(self) -> bool {
        self.lanes.iter().all(|&v| math::isfinite_safe(v))
    }
}

/// Scalar numerator over a vector denominator, `0` where a lane is `0`
#[inline]
pub fn safe_divide(a: impl Into<Float8>, b: impl Into<Float8>) -> Float8 {
    a.into().safe_divide(b)
}

impl From<f32> for Float8 {
    #[inline]
    fn from(f: f32) -> Self {
        Self::splat(f)
    }
}

impl From<[f32; LANES]> for Float8 {
    #[inline]
    fn from(lanes: [f32; LANES]) -> Self {
        Self::new(lanes)
    }
}

impl From<Float8> for [f32; LANES] {
    #[inline]
    fn from(v: Float8) -> Self {
        v.lanes
    }
}

impl Index<usize> for Float8 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.lanes[i]
    }
}

impl IndexMut<usize> for Float8 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.lanes[i]
    }
}

impl PartialEq for Float8 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // SAFETY: see `Float8::rcp`
        unsafe { ActiveBackend::eq(*self, *other) }
    }
}

impl Neg for Float8 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        // SAFETY: see `Float8::rcp`
        unsafe { ActiveBackend::neg(self) }
    }
}

/// Vector/vector, vector/scalar and scalar/vector forms of one operator,
/// plus its compound assignments
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for Float8 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                // SAFETY: see `Float8::rcp`
                unsafe { ActiveBackend::$method(self, rhs) }
            }
        }

        impl $trait<f32> for Float8 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f32) -> Self {
                <Float8 as $trait>::$method(self, Float8::splat(rhs))
            }
        }

        impl $trait<Float8> for f32 {
            type Output = Float8;

            #[inline]
            fn $method(self, rhs: Float8) -> Float8 {
                <Float8 as $trait>::$method(Float8::splat(self), rhs)
            }
        }

        impl $assign_trait for Float8 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl $assign_trait<f32> for Float8 {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);
