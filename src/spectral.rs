//! Spectral color representation selected at build time
//!
//! A `SpectralColor` carries 1, 3, or 8 channels depending on cargo
//! features (`channels-8` wins over `channels-3`; neither gives a bare
//! `f32`). Code written against [`Spectrum`] works for all three, and the
//! SVM evaluators are generic over it, so the build-selected alias costs
//! nothing at runtime.
//!
//! # Examples
//!
//! ```
//! use spectral_svm::spectral::Spectrum;
//! use spectral_svm::{for_each_channel, Float3};
//!
//! let mut c = Float3::splat(0.25);
//! for_each_channel!(i in Float3 => {
//!     c.set_channel(i, c.channel(i) * 2.0);
//! });
//! assert_eq!(c, Float3::splat(0.5));
//! ```

use std::ops::{Add, Mul, Sub};

use crate::float3::Float3;
use crate::float8::Float8;
use crate::math;

/// Shortest wavelength of the sampled visible range, in nanometers
pub const MIN_WAVELENGTH: f32 = 380.0;

/// Longest wavelength of the sampled visible range, in nanometers
pub const MAX_WAVELENGTH: f32 = 730.0;

/// Operations every spectral representation provides with matching names
/// and per-channel semantics
pub trait Spectrum:
    Copy + PartialEq + std::fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Number of meaningful channels
    const CHANNELS: usize;

    /// Broadcast `f` to every channel
    fn splat(f: f32) -> Self;

    fn zero() -> Self {
        Self::splat(0.0)
    }

    fn one() -> Self {
        Self::splat(1.0)
    }

    /// Read `CHANNELS` consecutive floats
    fn load(v: &[f32]) -> Self;

    /// Write `CHANNELS` consecutive floats
    fn store(self, v: &mut [f32]);

    /// Convert from an RGB triple
    fn from_float3(rgb: Float3) -> Self;

    /// Convert to an RGB triple
    fn to_float3(self) -> Float3;

    /// Channel `i`, `i < CHANNELS`
    fn channel(&self, i: usize) -> f32;

    fn set_channel(&mut self, i: usize, v: f32);

    fn safe_divide(self, b: Self) -> Self;
    fn pow(self, e: Self) -> Self;
    fn log(self) -> Self;
    fn sqrt(self) -> Self;
    fn safe_rcp(self) -> Self;
    fn fabs(self) -> Self;
    fn exp(self) -> Self;
    fn min(self, b: Self) -> Self;
    fn max(self, b: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn saturate(self) -> Self;

    /// Replace NaN and infinite channels with `0.0`
    fn ensure_finite(self) -> Self;

    /// True when no channel is NaN or infinite
    fn isfinite_safe(self) -> bool;
}

impl Spectrum for f32 {
    const CHANNELS: usize = 1;

    #[inline]
    fn splat(f: f32) -> Self {
        f
    }

    #[inline]
    fn load(v: &[f32]) -> Self {
        v[0]
    }

    #[inline]
    fn store(self, v: &mut [f32]) {
        v[0] = self;
    }

    #[inline]
    fn from_float3(rgb: Float3) -> Self {
        rgb.average()
    }

    #[inline]
    fn to_float3(self) -> Float3 {
        Float3::splat(self)
    }

    #[inline]
    fn channel(&self, i: usize) -> f32 {
        debug_assert_eq!(i, 0);
        *self
    }

    #[inline]
    fn set_channel(&mut self, i: usize, v: f32) {
        debug_assert_eq!(i, 0);
        *self = v;
    }

    #[inline]
    fn safe_divide(self, b: Self) -> Self {
        math::safe_divide(self, b)
    }

    #[inline]
    fn pow(self, e: Self) -> Self {
        self.powf(e)
    }

    #[inline]
    fn log(self) -> Self {
        self.ln()
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn safe_rcp(self) -> Self {
        math::safe_rcp(self)
    }

    #[inline]
    fn fabs(self) -> Self {
        self.abs()
    }

    #[inline]
    fn exp(self) -> Self {
        f32::exp(self)
    }

    #[inline]
    fn min(self, b: Self) -> Self {
        math::min(self, b)
    }

    #[inline]
    fn max(self, b: Self) -> Self {
        math::max(self, b)
    }

    #[inline]
    fn sin(self) -> Self {
        f32::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f32::cos(self)
    }

    #[inline]
    fn tan(self) -> Self {
        f32::tan(self)
    }

    #[inline]
    fn saturate(self) -> Self {
        math::saturate(self)
    }

    #[inline]
    fn ensure_finite(self) -> Self {
        math::ensure_finite(self)
    }

    #[inline]
    fn isfinite_safe(self) -> bool {
        math::isfinite_safe(self)
    }
}

/// Forward the per-channel math to the inherent methods of a vector type
macro_rules! forward_spectrum_math {
    ($ty:ty) => {
        #[inline]
        fn splat(f: f32) -> Self {
            <$ty>::splat(f)
        }

        #[inline]
        fn load(v: &[f32]) -> Self {
            <$ty>::load(v)
        }

        #[inline]
        fn store(self, v: &mut [f32]) {
            <$ty>::store(self, v)
        }

        #[inline]
        fn channel(&self, i: usize) -> f32 {
            self[i]
        }

        #[inline]
        fn set_channel(&mut self, i: usize, v: f32) {
            self[i] = v;
        }

        #[inline]
        fn safe_divide(self, b: Self) -> Self {
            <$ty>::safe_divide(self, b)
        }

        #[inline]
        fn pow(self, e: Self) -> Self {
            <$ty>::pow(self, e)
        }

        #[inline]
        fn log(self) -> Self {
            <$ty>::log(self)
        }

        #[inline]
        fn sqrt(self) -> Self {
            <$ty>::sqrt(self)
        }

        #[inline]
        fn safe_rcp(self) -> Self {
            <$ty>::safe_rcp(self)
        }

        #[inline]
        fn fabs(self) -> Self {
            <$ty>::fabs(self)
        }

        #[inline]
        fn exp(self) -> Self {
            <$ty>::exp(self)
        }

        #[inline]
        fn min(self, b: Self) -> Self {
            <$ty>::min(self, b)
        }

        #[inline]
        fn max(self, b: Self) -> Self {
            <$ty>::max(self, b)
        }

        #[inline]
        fn sin(self) -> Self {
            <$ty>::sin(self)
        }

        #[inline]
        fn cos(self) -> Self {
            <$ty>::cos(self)
        }

        #[inline]
        fn tan(self) -> Self {
            <$ty>::tan(self)
        }

        #[inline]
        fn saturate(self) -> Self {
            <$ty>::saturate(self)
        }

        #[inline]
        fn ensure_finite(self) -> Self {
            <$ty>::ensure_finite(self)
        }

        #[inline]
        fn isfinite_safe(self) -> bool {
            <$ty>::isfinite_safe(self)
        }
    };
}

impl Spectrum for Float3 {
    const CHANNELS: usize = 3;

    forward_spectrum_math!(Float3);

    #[inline]
    fn from_float3(rgb: Float3) -> Self {
        rgb
    }

    #[inline]
    fn to_float3(self) -> Float3 {
        self
    }
}

impl Spectrum for Float8 {
    const CHANNELS: usize = 8;

    forward_spectrum_math!(Float8);

    // No wavelength sampling here: RGB collapses to its gray level
    #[inline]
    fn from_float3(rgb: Float3) -> Self {
        Float8::splat(rgb.average())
    }

    #[inline]
    fn to_float3(self) -> Float3 {
        Float3::splat(self.average())
    }
}

/// Spectral color type of this build
#[cfg(feature = "channels-8")]
pub type SpectralColor = Float8;

/// Spectral color type of this build
#[cfg(all(feature = "channels-3", not(feature = "channels-8")))]
pub type SpectralColor = Float3;

/// Spectral color type of this build
#[cfg(not(any(feature = "channels-3", feature = "channels-8")))]
pub type SpectralColor = f32;

/// Channels carried by `SpectralColor` in this build
pub const CHANNELS_PER_RAY: usize = <SpectralColor as Spectrum>::CHANNELS;

#[inline]
pub fn make_spectral_color(f: f32) -> SpectralColor {
    <SpectralColor as Spectrum>::splat(f)
}

#[inline]
pub fn load_spectral_color(v: &[f32]) -> SpectralColor {
    <SpectralColor as Spectrum>::load(v)
}

#[inline]
pub fn store_spectral_color(s: SpectralColor, v: &mut [f32]) {
    Spectrum::store(s, v)
}

/// Loop over the active channels of a spectral value
///
/// `for_each_channel!(i => { ... })` iterates `CHANNELS_PER_RAY` times;
/// `for_each_channel!(i in T => { ... })` iterates `T::CHANNELS` times for a
/// named [`Spectrum`] type.
#[macro_export]
macro_rules! for_each_channel {
    ($i:ident in $spectrum:ty => $body:block) => {
        for $i in 0..(<$spectrum as $crate::spectral::Spectrum>::CHANNELS) $body
    };
    ($i:ident => $body:block) => {
        for $i in 0..($crate::spectral::CHANNELS_PER_RAY) $body
    };
}
