//! Backend implementations of the `Float8` lane primitives
//!
//! Only the operations with a native 256-bit instruction live here. Every
//! other `Float8` function (transcendentals, safe division, finiteness) is
//! lane-mapped through `crate::math` on all backends, so both code paths
//! share one definition of those results.
//!
//! # Safety
//!
//! All `unsafe` code is isolated within backend implementations. The public
//! `Float8` API remains 100% safe.
//!
//! # Backends
//!
//! - `scalar`: Portable per-lane implementation (always compiled)
//! - `avx2`: x86_64 256-bit SIMD

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod avx2;

use crate::float8::Float8;

/// Lane primitives every `Float8` code path must provide
///
/// Results must agree across implementations within floating-point
/// rounding, except `rcp` which may be a hardware estimate.
///
/// # Safety
///
/// Implementations may use SIMD intrinsics gated behind
/// `#[target_feature]`. Callers must ensure the CPU supports the
/// instruction set of the backend they invoke.
pub trait Float8Backend {
    /// Lane-wise `a + b`
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn add(a: Float8, b: Float8) -> Float8;

    /// Lane-wise `a - b`
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn sub(a: Float8, b: Float8) -> Float8;

    /// Lane-wise `a * b`
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn mul(a: Float8, b: Float8) -> Float8;

    /// Lane-wise `a / b`
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn div(a: Float8, b: Float8) -> Float8;

    /// Lane-wise sign flip
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn neg(a: Float8) -> Float8;

    /// True when every lane compares equal
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn eq(a: Float8, b: Float8) -> bool;

    /// Reciprocal; may be a reduced-precision estimate
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn rcp(a: Float8) -> Float8;

    /// Lane-wise square root
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn sqrt(a: Float8) -> Float8;

    /// Lane-wise `if a < b { a } else { b }`
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn min(a: Float8, b: Float8) -> Float8;

    /// Lane-wise `if a > b { a } else { b }`
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn max(a: Float8, b: Float8) -> Float8;

    /// Lane-wise absolute value
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn fabs(a: Float8) -> Float8;

    /// Lane-wise floor
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn floor(a: Float8) -> Float8;

    /// Horizontal sum broadcast to all lanes
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn reduce_add(a: Float8) -> Float8;

    /// Sum of the eight lane products
    ///
    /// # Safety
    ///
    /// CPU must support the backend's instruction set
    unsafe fn dot(a: Float8, b: Float8) -> f32;
}

/// Backend compiled in for `Float8` arithmetic
#[cfg(all(target_arch = "x86_64", target_feature = "avx2", not(feature = "portable")))]
pub(crate) type ActiveBackend = avx2::Avx2Backend;

/// Backend compiled in for `Float8` arithmetic
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2", not(feature = "portable"))))]
pub(crate) type ActiveBackend = scalar::ScalarBackend;
