//! Scalar (non-SIMD) backend implementation
//!
//! This is the portable baseline that works on all platforms. Each
//! operation is a plain per-lane loop and doubles as the correctness
//! reference for the SIMD backends.

use super::Float8Backend;
use crate::float8::Float8;
use crate::math;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl ScalarBackend {
    #[inline]
    fn map(a: Float8, f: impl Fn(f32) -> f32) -> Float8 {
        Float8::new(a.to_array().map(f))
    }

    #[inline]
    fn zip(a: Float8, b: Float8, f: impl Fn(f32, f32) -> f32) -> Float8 {
        let (a, b) = (a.to_array(), b.to_array());
        Float8::new(std::array::from_fn(|i| f(a[i], b[i])))
    }
}

// SAFETY (all methods): no raw pointers or intrinsics are involved; the
// functions are marked unsafe only to match the Float8Backend interface.
impl Float8Backend for ScalarBackend {
    unsafe fn add(a: Float8, b: Float8) -> Float8 {
        Self::zip(a, b, |x, y| x + y)
    }

    unsafe fn sub(a: Float8, b: Float8) -> Float8 {
        Self::zip(a, b, |x, y| x - y)
    }

    unsafe fn mul(a: Float8, b: Float8) -> Float8 {
        Self::zip(a, b, |x, y| x * y)
    }

    unsafe fn div(a: Float8, b: Float8) -> Float8 {
        Self::zip(a, b, |x, y| x / y)
    }

    unsafe fn neg(a: Float8) -> Float8 {
        Self::map(a, |x| -x)
    }

    unsafe fn eq(a: Float8, b: Float8) -> bool {
        a.to_array() == b.to_array()
    }

    // Exact division, no estimate on the portable path
    unsafe fn rcp(a: Float8) -> Float8 {
        Self::map(a, |x| 1.0 / x)
    }

    unsafe fn sqrt(a: Float8) -> Float8 {
        Self::map(a, f32::sqrt)
    }

    unsafe fn min(a: Float8, b: Float8) -> Float8 {
        Self::zip(a, b, math::min)
    }

    unsafe fn max(a: Float8, b: Float8) -> Float8 {
        Self::zip(a, b, math::max)
    }

    unsafe fn fabs(a: Float8) -> Float8 {
        Self::map(a, f32::abs)
    }

    unsafe fn floor(a: Float8) -> Float8 {
        Self::map(a, f32::floor)
    }

    unsafe fn reduce_add(a: Float8) -> Float8 {
        let v = a.to_array();
        let mut total = 0.0;
        for x in v {
            total += x;
        }
        Float8::splat(total)
    }

    unsafe fn dot(a: Float8, b: Float8) -> f32 {
        let (a, b) = (a.to_array(), b.to_array());
        let mut sum = 0.0;
        for i in 0..8 {
            sum += a[i] * b[i];
        }
        sum
    }
}
