//! Math node evaluators
//!
//! Each evaluator unpacks operand offsets from its instruction words, loads
//! typed operands from the stack, computes, and stores the result. The
//! caller has already decoded the opcode into its enum.

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::math_util::{svm_math, svm_vector_math};
use super::node::{read_node, unpack_uchar2, unpack_uchar3, SvmNode};
use super::stack::*;
use super::types::{NodeMathType, NodeSpectrumMathType, NodeVectorMathType};
use crate::error::Result;
use crate::float3::Float3;
use crate::spectral::Spectrum;

/// Scalar math node: `result = svm_math(ty, a, b, c)`
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(stack)))]
pub fn svm_node_math(
    stack: &mut [f32],
    ty: NodeMathType,
    inputs_stack_offsets: u32,
    result_stack_offset: u32,
) {
    let (a_offset, b_offset, c_offset) = unpack_uchar3(inputs_stack_offsets);

    let a = stack_load_float(stack, a_offset);
    let b = stack_load_float(stack, b_offset);
    let c = stack_load_float(stack, c_offset);
    let result = svm_math(ty, a, b, c);

    stack_store_float(stack, result_stack_offset, result);
}

/// Channel-wise spectral math node
///
/// `inputs_stack_offsets` packs `(a, b, use_clamp)`; a nonzero `use_clamp`
/// saturates the result before it is stored.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(stack)))]
pub fn svm_node_spectrum_math<S: Spectrum>(
    stack: &mut [f32],
    ty: NodeSpectrumMathType,
    inputs_stack_offsets: u32,
    result_stack_offset: u32,
) {
    let (a_offset, b_offset, use_clamp) = unpack_uchar3(inputs_stack_offsets);

    let a: S = stack_load_spectral(stack, a_offset);
    let b: S = stack_load_spectral(stack, b_offset);

    let mut result = spectrum_math(ty, a, b);
    if use_clamp != 0 {
        result = result.saturate();
    }

    stack_store_spectral(stack, result_stack_offset, result);
}

/// Apply one spectral opcode to two spectral values
pub fn spectrum_math<S: Spectrum>(ty: NodeSpectrumMathType, a: S, b: S) -> S {
    match ty {
        NodeSpectrumMathType::Add => a + b,
        NodeSpectrumMathType::Subtract => a - b,
        NodeSpectrumMathType::Multiply => a * b,
        NodeSpectrumMathType::Divide => a.safe_divide(b),
        NodeSpectrumMathType::Power => a.pow(b),
        NodeSpectrumMathType::Logarithm => a.log(),
        NodeSpectrumMathType::Sqrt => a.sqrt(),
        NodeSpectrumMathType::InvSqrt => a.sqrt().safe_rcp(),
        NodeSpectrumMathType::Absolute => a.fabs(),
        NodeSpectrumMathType::Exponent => a.exp(),
        NodeSpectrumMathType::Minimum => a.min(b),
        NodeSpectrumMathType::Maximum => a.max(b),
        NodeSpectrumMathType::LessThan => per_channel(a, b, |x, y| (x < y) as u8 as f32),
        NodeSpectrumMathType::GreaterThan => per_channel(a, b, |x, y| (x > y) as u8 as f32),
        NodeSpectrumMathType::Sign => per_channel(a, b, |x, _| {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        }),
        NodeSpectrumMathType::Sine => a.sin(),
        NodeSpectrumMathType::Cosine => a.cos(),
        NodeSpectrumMathType::Tangent => a.tan(),
    }
}

/// Build a result channel by channel for operations with no vector form
#[inline]
fn per_channel<S: Spectrum>(a: S, b: S, f: impl Fn(f32, f32) -> f32) -> S {
    let mut result = S::zero();
    crate::for_each_channel!(i in S => {
        result.set_channel(i, f(a.channel(i), b.channel(i)));
    });
    result
}

/// Vector math node
///
/// `inputs_stack_offsets` packs `(a, b, scale)` and `outputs_stack_offsets`
/// packs `(value, vector)`. `Wrap` consumes the next instruction word for
/// its third operand, advancing `offset`. Either output may be
/// `SVM_STACK_INVALID`, in which case its slot is left untouched.
///
/// # Errors
///
/// Returns `SvmError::ProgramOverrun` when `Wrap` has no extra word to read.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(program, stack)))]
pub fn svm_node_vector_math(
    program: &[SvmNode],
    stack: &mut [f32],
    ty: NodeVectorMathType,
    inputs_stack_offsets: u32,
    outputs_stack_offsets: u32,
    offset: &mut usize,
) -> Result<()> {
    let (a_offset, b_offset, scale_offset) = unpack_uchar3(inputs_stack_offsets);
    let (value_offset, vector_offset) = unpack_uchar2(outputs_stack_offsets);

    let a = stack_load_float3(stack, a_offset);
    let b = stack_load_float3(stack, b_offset);
    let scale = stack_load_float(stack, scale_offset);

    let c = if ty == NodeVectorMathType::Wrap {
        let extra = read_node(program, offset)?;
        stack_load_float3(stack, extra.x)
    } else {
        Float3::zero()
    };

    let (value, vector) = svm_vector_math(ty, a, b, c, scale);

    if stack_valid(value_offset) {
        stack_store_float(stack, value_offset, value);
    }
    if stack_valid(vector_offset) {
        stack_store_float3(stack, vector_offset, vector);
    }
    Ok(())
}
