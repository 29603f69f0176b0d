//! Spectral SVM: 8-wide SIMD math kernel and shader math node evaluation
//!
//! This crate provides the numeric core of a stack-machine shader VM that
//! can carry spectral colors:
//!
//! 1. **`Float8`** - an 8-lane `f32` vector with a full arithmetic,
//!    reduction, transcendental, safe-division and finiteness API. The
//!    hardware-backed operations use AVX2 when the build enables it and a
//!    portable per-lane path otherwise.
//! 2. **`SpectralColor`** - 1, 3, or 8 channels chosen by cargo feature,
//!    with one [`spectral::Spectrum`] interface across all three.
//! 3. **`svm`** - evaluators for the scalar, vector, spectral and map-range
//!    math nodes, reading and writing the interpreter's flat float stack.
//!
//! # Design Principles
//!
//! - **Compile-time selection**: backend and channel count are fixed per
//!   build, no runtime dispatch on the hot path
//! - **Never crash on data**: zero denominators yield `0`, non-finite values
//!   are scrubbed on request, unused outputs are skipped
//! - **Closed opcode sets**: raw words are decoded once into enums and
//!   matched exhaustively
//! - **Zero unsafe in public API**: `unsafe` is isolated in `backends`
//!
//! # Quick Start
//!
//! ```rust
//! use spectral_svm::Float8;
//!
//! let a = Float8::splat(0.9);
//! let b = Float8::splat(0.9);
//!
//! let clamped = (a + b).saturate();
//! assert_eq!(clamped, Float8::one());
//! assert_eq!(Float8::one().safe_divide(Float8::zero()), Float8::zero());
//! ```

pub mod backends;
pub mod error;
pub mod float3;
pub mod float8;
pub mod math;
pub mod spectral;
pub mod svm;

pub use error::{Result, SvmError};
pub use float3::Float3;
pub use float8::Float8;
pub use spectral::{SpectralColor, Spectrum, CHANNELS_PER_RAY};

/// Code path used for `Float8` arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Portable per-lane loops
    Scalar,
    /// AVX2 (256-bit)
    AVX2,
}

/// Backend this build compiled in for `Float8`
///
/// AVX2 is selected when the target enables the `avx2` feature (for
/// example `-C target-cpu=native` on a capable machine) and the `portable`
/// cargo feature is off.
///
/// # Examples
///
/// ```
/// use spectral_svm::{active_backend, Backend};
///
/// let backend = active_backend();
/// assert!(matches!(backend, Backend::Scalar | Backend::AVX2));
/// ```
pub const fn active_backend() -> Backend {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2", not(feature = "portable")))]
    {
        Backend::AVX2
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2", not(feature = "portable"))))]
    {
        Backend::Scalar
    }
}

/// True when the running CPU could execute the AVX2 backend
///
/// Independent of which backend was compiled in; used to decide whether
/// the AVX2 backend can be exercised directly.
pub fn avx2_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        is_x86_feature_detected!("avx2")
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}
