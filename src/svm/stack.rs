//! Typed access to the SVM evaluation stack
//!
//! The stack is a flat `f32` buffer owned by the interpreter and addressed by
//! byte-sized offsets. Offset `SVM_STACK_INVALID` marks an output nobody
//! consumes; stores to it must be skipped via [`stack_valid`].

use crate::float3::Float3;
use crate::spectral::Spectrum;

/// Number of float slots an interpreter allocates for one evaluation
pub const SVM_STACK_SIZE: usize = 255;

/// Sentinel offset meaning "no destination requested"
pub const SVM_STACK_INVALID: u32 = 255;

/// True when `offset` names a real slot rather than the unused sentinel
#[inline]
pub fn stack_valid(offset: u32) -> bool {
    offset != SVM_STACK_INVALID
}

#[inline]
pub fn stack_load_float(stack: &[f32], offset: u32) -> f32 {
    stack[offset as usize]
}

#[inline]
pub fn stack_load_float3(stack: &[f32], offset: u32) -> Float3 {
    Float3::load(&stack[offset as usize..])
}

#[inline]
pub fn stack_load_spectral<S: Spectrum>(stack: &[f32], offset: u32) -> S {
    S::load(&stack[offset as usize..])
}

#[inline]
pub fn stack_store_float(stack: &mut [f32], offset: u32, f: f32) {
    stack[offset as usize] = f;
}

#[inline]
pub fn stack_store_float3(stack: &mut [f32], offset: u32, f: Float3) {
    f.store(&mut stack[offset as usize..]);
}

#[inline]
pub fn stack_store_spectral<S: Spectrum>(stack: &mut [f32], offset: u32, s: S) {
    s.store(&mut stack[offset as usize..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float8::Float8;

    #[test]
    fn test_stack_valid() {
        assert!(stack_valid(0));
        assert!(stack_valid(254));
        assert!(!stack_valid(SVM_STACK_INVALID));
    }

    #[test]
    fn test_float_and_float3_access() {
        let mut stack = vec![0.0; 16];
        stack_store_float(&mut stack, 2, 1.5);
        stack_store_float3(&mut stack, 4, Float3::new(1.0, 2.0, 3.0));

        assert_eq!(stack_load_float(&stack, 2), 1.5);
        assert_eq!(stack_load_float3(&stack, 4), Float3::new(1.0, 2.0, 3.0));
        assert_eq!(stack[7], 0.0);
    }

    #[test]
    fn test_spectral_access_width() {
        let mut stack = vec![0.0; 16];
        stack_store_spectral(&mut stack, 3, Float8::splat(2.0));
        assert_eq!(&stack[3..11], &[2.0; 8]);
        assert_eq!(stack[11], 0.0);

        let s: Float8 = stack_load_spectral(&stack, 3);
        assert_eq!(s, Float8::splat(2.0));
        let one: f32 = stack_load_spectral(&stack, 2);
        assert_eq!(one, 0.0);
    }
}
