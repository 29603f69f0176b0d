//! Backend Equivalence Tests
//!
//! Every `Float8Backend` must agree with the portable scalar backend within
//! floating-point rounding. The one exception is `rcp`, which the AVX2
//! backend computes with a hardware estimate; it is checked against a
//! relative error bound instead.
//!
//! AVX2 cases are skipped at runtime on CPUs without AVX2.

use proptest::prelude::*;
use spectral_svm::backends::scalar::ScalarBackend;
use spectral_svm::backends::Float8Backend;
use spectral_svm::Float8;

/// Documented bound on `rcp` relative error for estimate-based backends
const RCP_MAX_RELATIVE_ERROR: f32 = 1.0 / 2048.0;

fn lanes(range: std::ops::Range<f32>) -> impl Strategy<Value = Float8> {
    prop::array::uniform8(range).prop_map(Float8::new)
}

fn nonzero_lanes() -> impl Strategy<Value = Float8> {
    prop::array::uniform8(prop_oneof![-1000.0f32..-1e-3, 1e-3f32..1000.0]).prop_map(Float8::new)
}

fn assert_close(actual: Float8, expected: Float8, rel: f32) -> Result<(), TestCaseError> {
    for i in 0..8 {
        let tolerance = rel * expected[i].abs().max(1.0);
        prop_assert!(
            (actual[i] - expected[i]).abs() <= tolerance,
            "lane {}: {} vs {}",
            i,
            actual[i],
            expected[i]
        );
    }
    Ok(())
}

const PROPTEST_CASES: u32 = 100;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    /// (a + b) - b recovers a on the active backend
    #[test]
    fn add_sub_roundtrip_active(a in lanes(-1000.0..1000.0), b in lanes(-1000.0..1000.0)) {
        assert_close((a + b) - b, a, 1e-4)?;
    }

    /// (a + b) - b recovers a on the scalar backend
    #[test]
    fn add_sub_roundtrip_scalar(a in lanes(-1000.0..1000.0), b in lanes(-1000.0..1000.0)) {
        let back = unsafe { ScalarBackend::sub(ScalarBackend::add(a, b), b) };
        assert_close(back, a, 1e-4)?;
    }

    /// safe_rcp is exact on every build
    #[test]
    fn safe_rcp_exact(a in nonzero_lanes()) {
        let r = a.safe_rcp();
        for i in 0..8 {
            prop_assert_eq!(r[i], 1.0 / a[i]);
        }
    }

    /// Active-backend rcp stays within the estimate bound
    #[test]
    fn rcp_within_bound(a in nonzero_lanes()) {
        let r = a.rcp();
        for i in 0..8 {
            let exact = 1.0 / a[i];
            prop_assert!(((r[i] - exact) / exact).abs() <= RCP_MAX_RELATIVE_ERROR);
        }
    }

    /// Scalar rcp is exact division
    #[test]
    fn scalar_rcp_exact(a in nonzero_lanes()) {
        let r = unsafe { ScalarBackend::rcp(a) };
        for i in 0..8 {
            prop_assert_eq!(r[i], 1.0 / a[i]);
        }
    }

    /// dot equals the sum of the eight lane products
    #[test]
    fn dot_matches_products(a in lanes(-100.0..100.0), b in lanes(-100.0..100.0)) {
        let expected: f32 = (0..8).map(|i| a[i] * b[i]).sum();
        let magnitude: f32 = (0..8).map(|i| (a[i] * b[i]).abs()).sum();
        prop_assert!((a.dot(b) - expected).abs() <= 1e-5 * magnitude.max(1.0));
    }

    /// average is reduce_add_f / 8
    #[test]
    fn average_is_mean(a in lanes(-100.0..100.0)) {
        let mean = a.to_array().iter().sum::<f32>() / 8.0;
        prop_assert!((a.average() - mean).abs() <= 1e-4);
    }
}

#[cfg(target_arch = "x86_64")]
mod avx2 {
    use super::*;
    use spectral_svm::backends::avx2::Avx2Backend;

    fn skip() -> bool {
        if !spectral_svm::avx2_available() {
            eprintln!("Skipping AVX2 test: CPU does not support AVX2");
            return true;
        }
        false
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

        #[test]
        fn elementwise_bit_exact(a in lanes(-1000.0..1000.0), b in nonzero_lanes()) {
            if skip() {
                return Ok(());
            }
            unsafe {
                prop_assert_eq!(Avx2Backend::add(a, b).to_array(), ScalarBackend::add(a, b).to_array());
                prop_assert_eq!(Avx2Backend::sub(a, b).to_array(), ScalarBackend::sub(a, b).to_array());
                prop_assert_eq!(Avx2Backend::mul(a, b).to_array(), ScalarBackend::mul(a, b).to_array());
                prop_assert_eq!(Avx2Backend::div(a, b).to_array(), ScalarBackend::div(a, b).to_array());
                prop_assert_eq!(Avx2Backend::min(a, b).to_array(), ScalarBackend::min(a, b).to_array());
                prop_assert_eq!(Avx2Backend::max(a, b).to_array(), ScalarBackend::max(a, b).to_array());
                prop_assert_eq!(Avx2Backend::neg(a).to_array(), ScalarBackend::neg(a).to_array());
                prop_assert_eq!(Avx2Backend::fabs(a).to_array(), ScalarBackend::fabs(a).to_array());
                prop_assert_eq!(Avx2Backend::floor(a).to_array(), ScalarBackend::floor(a).to_array());
                let pos = ScalarBackend::fabs(a);
                prop_assert_eq!(Avx2Backend::sqrt(pos).to_array(), ScalarBackend::sqrt(pos).to_array());
                prop_assert_eq!(Avx2Backend::eq(a, b), ScalarBackend::eq(a, b));
                prop_assert!(Avx2Backend::eq(a, a));
            }
        }

        #[test]
        fn reductions_within_rounding(a in lanes(-1000.0..1000.0), b in lanes(-1000.0..1000.0)) {
            if skip() {
                return Ok(());
            }
            unsafe {
                let magnitude: f32 = a.to_array().iter().map(|x| x.abs()).sum();
                let sum_avx = Avx2Backend::reduce_add(a);
                let sum_scalar = ScalarBackend::reduce_add(a);
                for i in 0..8 {
                    prop_assert!((sum_avx[i] - sum_scalar[i]).abs() <= 1e-5 * magnitude.max(1.0));
                }

                let dot_magnitude: f32 = (0..8).map(|i| (a[i] * b[i]).abs()).sum();
                prop_assert!(
                    (Avx2Backend::dot(a, b) - ScalarBackend::dot(a, b)).abs()
                        <= 1e-5 * dot_magnitude.max(1.0)
                );
            }
        }

        #[test]
        fn rcp_estimate_bounded(a in nonzero_lanes()) {
            if skip() {
                return Ok(());
            }
            let r = unsafe { Avx2Backend::rcp(a) };
            for i in 0..8 {
                let exact = 1.0 / a[i];
                prop_assert!(((r[i] - exact) / exact).abs() <= RCP_MAX_RELATIVE_ERROR);
            }
        }
    }
}
