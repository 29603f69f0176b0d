//! AVX2 backend implementation (x86_64 256-bit SIMD)
//!
//! One `__m256` register holds a whole `Float8`, so every primitive here is
//! a load, one or two instructions, and a store.
//!
//! # Precision
//!
//! `rcp` uses `_mm256_rcp_ps`, whose relative error is at most
//! `1.5 * 2^-12`. Everything else matches the scalar backend up to the
//! summation order of the horizontal reductions.
//!
//! # Safety
//!
//! All AVX2 intrinsics are marked `unsafe` by Rust. This module isolates
//! them and verifies them against `ScalarBackend` in its tests.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::Float8Backend;
use crate::float8::Float8;

/// AVX2 backend (256-bit SIMD for x86_64)
pub struct Avx2Backend;

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn load(a: &Float8) -> __m256 {
    // Float8 is 32-byte aligned
    _mm256_load_ps(a.as_ptr())
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn store(v: __m256) -> Float8 {
    let mut out = Float8::zero();
    _mm256_store_ps(out.as_mut_ptr(), v);
    out
}

impl Float8Backend for Avx2Backend {
    #[target_feature(enable = "avx2")]
    unsafe fn add(a: Float8, b: Float8) -> Float8 {
        store(_mm256_add_ps(load(&a), load(&b)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn sub(a: Float8, b: Float8) -> Float8 {
        store(_mm256_sub_ps(load(&a), load(&b)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn mul(a: Float8, b: Float8) -> Float8 {
        store(_mm256_mul_ps(load(&a), load(&b)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn div(a: Float8, b: Float8) -> Float8 {
        store(_mm256_div_ps(load(&a), load(&b)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn neg(a: Float8) -> Float8 {
        // Flip the sign bit of every lane
        let mask = _mm256_castsi256_ps(_mm256_set1_epi32(i32::MIN));
        store(_mm256_xor_ps(load(&a), mask))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn eq(a: Float8, b: Float8) -> bool {
        // Ordered, non-signaling compare: -0.0 == 0.0, NaN never equal
        let cmp = _mm256_cmp_ps::<_CMP_EQ_OQ>(load(&a), load(&b));
        _mm256_movemask_ps(cmp) == 0b1111_1111
    }

    #[target_feature(enable = "avx2")]
    unsafe fn rcp(a: Float8) -> Float8 {
        store(_mm256_rcp_ps(load(&a)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn sqrt(a: Float8) -> Float8 {
        store(_mm256_sqrt_ps(load(&a)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn min(a: Float8, b: Float8) -> Float8 {
        store(_mm256_min_ps(load(&a), load(&b)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn max(a: Float8, b: Float8) -> Float8 {
        store(_mm256_max_ps(load(&a), load(&b)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn fabs(a: Float8) -> Float8 {
        // Clear the sign bit of every lane
        let mask = _mm256_castsi256_ps(_mm256_set1_epi32(i32::MAX));
        store(_mm256_and_ps(load(&a), mask))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn floor(a: Float8) -> Float8 {
        store(_mm256_floor_ps(load(&a)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn reduce_add(a: Float8) -> Float8 {
        // hadd works within each 128-bit half: two rounds leave each half's
        // sum in every lane of that half
        let v = load(&a);
        let h = _mm256_hadd_ps(v, v);
        let h = _mm256_hadd_ps(h, h);
        let low = _mm256_castps256_ps128(h);
        let high = _mm256_extractf128_ps::<1>(h);
        Float8::splat(_mm_cvtss_f32(_mm_add_ss(low, high)))
    }

    #[target_feature(enable = "avx2")]
    unsafe fn dot(a: Float8, b: Float8) -> f32 {
        // dp_ps also works per 128-bit half; mask 0xFF multiplies all four
        // lanes and broadcasts the half-sum
        let t = _mm256_dp_ps::<0xFF>(load(&a), load(&b));
        let low = _mm256_castps256_ps128(t);
        let high = _mm256_extractf128_ps::<1>(t);
        _mm_cvtss_f32(_mm_add_ss(low, high))
    }
}
