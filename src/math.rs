//! Scalar math primitives shared by every lane-wise kernel
//!
//! The vector types distribute these per lane, so their edge-case
//! behavior (zero denominators, NaN handling, domain clamping) defines the
//! behavior of `Float3`, `Float8`, and every SVM node built on them.

use std::f32::consts::PI;

/// Lane minimum with hardware semantics: the second operand wins on NaN
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Lane maximum with hardware semantics: the second operand wins on NaN
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// `min(max(a, mn), mx)`
#[inline]
pub fn clamp(a: f32, mn: f32, mx: f32) -> f32 {
    min(max(a, mn), mx)
}

/// Clamp to `[0, 1]`
#[inline]
pub fn saturate(a: f32) -> f32 {
    clamp(a, 0.0, 1.0)
}

/// True when `v` is neither NaN nor infinite
///
/// Works on the bit pattern so it stays correct under fast-math style
/// optimizations that assume finite inputs.
#[inline]
pub fn isfinite_safe(v: f32) -> bool {
    const EXPONENT_MASK: u32 = 0x7f80_0000;
    v.to_bits() & EXPONENT_MASK != EXPONENT_MASK
}

/// Replace NaN and infinities with `0.0`
#[inline]
pub fn ensure_finite(v: f32) -> f32 {
    if isfinite_safe(v) {
        v
    } else {
        0.0
    }
}

/// `a / b`, or `0.0` when `b` is exactly zero
#[inline]
pub fn safe_divide(a: f32, b: f32) -> f32 {
    if b != 0.0 {
        a / b
    } else {
        0.0
    }
}

/// `1 / a`, or `0.0` when `a` is exactly zero
#[inline]
pub fn safe_rcp(a: f32) -> f32 {
    if a != 0.0 {
        1.0 / a
    } else {
        0.0
    }
}

#[inline]
pub fn safe_sqrtf(a: f32) -> f32 {
    max(a, 0.0).sqrt()
}

#[inline]
pub fn inversesqrtf(a: f32) -> f32 {
    1.0 / a.sqrt()
}

/// `a^b`, returning `0.0` for a negative base with a non-integer exponent
#[inline]
pub fn safe_powf(a: f32, b: f32) -> f32 {
    if a < 0.0 && b != b.trunc() {
        return 0.0;
    }
    a.powf(b)
}

/// Logarithm of `a` in base `b`, `0.0` outside the domain
#[inline]
pub fn safe_logf(a: f32, b: f32) -> f32 {
    if a <= 0.0 || b <= 0.0 {
        return 0.0;
    }
    safe_divide(a.ln(), b.ln())
}

#[inline]
pub fn safe_asinf(a: f32) -> f32 {
    clamp(a, -1.0, 1.0).asin()
}

#[inline]
pub fn safe_acosf(a: f32) -> f32 {
    clamp(a, -1.0, 1.0).acos()
}

/// Truncated modulo (sign of `a`), `0.0` when `b` is zero
#[inline]
pub fn safe_modulo(a: f32, b: f32) -> f32 {
    if b != 0.0 {
        a % b
    } else {
        0.0
    }
}

/// Floored modulo (sign of `b`), `0.0` when `b` is zero
#[inline]
pub fn safe_floored_modulo(a: f32, b: f32) -> f32 {
    if b != 0.0 {
        a - (a / b).floor() * b
    } else {
        0.0
    }
}

#[inline]
pub fn fractf(a: f32) -> f32 {
    a - a.floor()
}

/// Round `a` down to a multiple of `b`
#[inline]
pub fn snapf(a: f32, b: f32) -> f32 {
    safe_divide(a, b).floor() * b
}

/// Wrap `value` into `[min, max)`; a zero-width range collapses to `min`
#[inline]
pub fn wrapf(value: f32, max: f32, min: f32) -> f32 {
    let range = max - min;
    if range != 0.0 {
        value - range * ((value - min) / range).floor()
    } else {
        min
    }
}

/// Bounce `a` back and forth between `0` and `b`
#[inline]
pub fn pingpongf(a: f32, b: f32) -> f32 {
    if b != 0.0 {
        (fractf((a - b) / (b * 2.0)) * b * 2.0 - b).abs()
    } else {
        0.0
    }
}

/// Polynomial smooth minimum with blend distance `k`
#[inline]
pub fn smoothminf(a: f32, b: f32, k: f32) -> f32 {
    if k != 0.0 {
        let h = (k - (a - b).abs()).max(0.0) / k;
        a.min(b) - h * h * h * k * (1.0 / 6.0)
    } else {
        a.min(b)
    }
}

/// Sign of `a` as `-1`, `0`, or `1`
#[inline]
pub fn compatible_signf(a: f32) -> f32 {
    if a == 0.0 {
        0.0
    } else if a < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Round half up, `floor(a + 0.5)`
#[inline]
pub fn roundf_half_up(a: f32) -> f32 {
    (a + 0.5).floor()
}

#[inline]
pub fn truncf(a: f32) -> f32 {
    if a >= 0.0 {
        a.floor()
    } else {
        a.ceil()
    }
}

#[inline]
pub fn deg2radf(a: f32) -> f32 {
    a * (PI / 180.0)
}

#[inline]
pub fn rad2degf(a: f32) -> f32 {
    a * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_nan_takes_second_operand() {
        assert_eq!(min(f32::NAN, 1.0), 1.0);
        assert!(min(1.0, f32::NAN).is_nan());
        assert_eq!(max(f32::NAN, 1.0), 1.0);
        assert!(max(1.0, f32::NAN).is_nan());
    }

    #[test]
    fn test_isfinite_safe() {
        assert!(isfinite_safe(0.0));
        assert!(isfinite_safe(-1e30));
        assert!(isfinite_safe(f32::MIN_POSITIVE / 2.0));
        assert!(!isfinite_safe(f32::NAN));
        assert!(!isfinite_safe(f32::INFINITY));
        assert!(!isfinite_safe(f32::NEG_INFINITY));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(2.5), 2.5);
        assert_eq!(ensure_finite(f32::NAN), 0.0);
        assert_eq!(ensure_finite(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_safe_divide_and_rcp() {
        assert_eq!(safe_divide(1.0, 0.0), 0.0);
        assert_eq!(safe_divide(1.0, -0.0), 0.0);
        assert_eq!(safe_divide(3.0, 2.0), 1.5);
        assert_eq!(safe_rcp(0.0), 0.0);
        assert_eq!(safe_rcp(4.0), 0.25);
    }

    #[test]
    fn test_safe_powf() {
        assert_eq!(safe_powf(-2.0, 0.5), 0.0);
        assert_eq!(safe_powf(-2.0, 3.0), -8.0);
        assert!((safe_powf(2.0, 0.5) - 2.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_safe_logf() {
        assert_eq!(safe_logf(-1.0, 10.0), 0.0);
        assert_eq!(safe_logf(8.0, 0.0), 0.0);
        assert!((safe_logf(8.0, 2.0) - 3.0).abs() < 1e-6);
        // log base 1 divides by ln(1) == 0
        assert_eq!(safe_logf(8.0, 1.0), 0.0);
    }

    #[test]
    fn test_safe_trig_domain() {
        assert!((safe_asinf(2.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((safe_acosf(-3.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_modulo_variants() {
        assert_eq!(safe_modulo(-5.0, 3.0), -2.0);
        assert_eq!(safe_floored_modulo(-5.0, 3.0), 1.0);
        assert_eq!(safe_modulo(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_wrapf() {
        assert!((wrapf(5.5, 2.0, 0.0) - 1.5).abs() < 1e-6);
        assert!((wrapf(-0.5, 1.0, 0.0) - 0.5).abs() < 1e-6);
        assert_eq!(wrapf(7.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_pingpongf() {
        assert!((pingpongf(1.5, 1.0) - 0.5).abs() < 1e-6);
        assert!((pingpongf(2.25, 1.0) - 0.25).abs() < 1e-6);
        assert_eq!(pingpongf(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_smoothminf() {
        assert_eq!(smoothminf(1.0, 2.0, 0.0), 1.0);
        // Far apart inputs are unaffected by the blend
        assert_eq!(smoothminf(1.0, 5.0, 1.0), 1.0);
        assert!(smoothminf(1.0, 1.0, 1.0) < 1.0);
    }

    #[test]
    fn test_compatible_signf() {
        assert_eq!(compatible_signf(-2.0), -1.0);
        assert_eq!(compatible_signf(0.0), 0.0);
        assert_eq!(compatible_signf(-0.0), 0.0);
        assert_eq!(compatible_signf(3.0), 1.0);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(roundf_half_up(2.5), 3.0);
        assert_eq!(roundf_half_up(-2.5), -2.0);
        assert_eq!(truncf(-2.7), -2.0);
        assert_eq!(truncf(2.7), 2.0);
        assert_eq!(snapf(7.3, 2.0), 6.0);
        assert_eq!(snapf(7.3, 0.0), 0.0);
        assert!((fractf(-0.25) - 0.75).abs() < 1e-6);
    }
}
