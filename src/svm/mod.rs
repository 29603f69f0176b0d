//! Math node dispatch for the stack-machine shader VM
//!
//! The interpreter owns the program and the stack; this module only borrows
//! them for the duration of one node. Two layers are provided:
//!
//! - Typed evaluators (`svm_node_math`, `svm_node_spectrum_math`,
//!   `svm_node_vector_math`, `svm_node_map_range_spectrum`) that take
//!   already-decoded opcodes and trust their offsets.
//! - [`svm_eval_node`], which reads one raw instruction, rejects unknown
//!   node types and opcodes and out-of-range offsets, then calls the typed
//!   evaluator.
//!
//! # Examples
//!
//! ```
//! use spectral_svm::svm::{encode_uchar4, svm_eval_node, NodeMathType, ShaderNodeType, SvmNode};
//!
//! let mut stack = vec![0.0f32; 8];
//! stack[0] = 2.0;
//! stack[1] = 5.0;
//!
//! let program = [SvmNode::new(
//!     ShaderNodeType::Math as u32,
//!     NodeMathType::Add as u32,
//!     encode_uchar4(0, 1, 2, 0),
//!     3,
//! )];
//! let mut offset = 0;
//! svm_eval_node(&program, &mut stack, &mut offset).unwrap();
//!
//! assert_eq!(stack[3], 7.0);
//! assert_eq!(offset, 1);
//! ```

pub mod map_range;
pub mod math;
pub mod math_util;
pub mod node;
pub mod stack;
pub mod types;

pub use map_range::{map_range_spectrum, svm_node_map_range_spectrum, MAP_RANGE_DEFAULT_CLAMP};
pub use math::{spectrum_math, svm_node_math, svm_node_spectrum_math, svm_node_vector_math};
pub use math_util::{svm_math, svm_vector_math};
pub use node::{encode_uchar4, read_node, unpack_uchar2, unpack_uchar3, unpack_uchar4, SvmNode};
pub use stack::{
    stack_load_float, stack_load_float3, stack_load_spectral, stack_store_float,
    stack_store_float3, stack_store_spectral, stack_valid, SVM_STACK_INVALID, SVM_STACK_SIZE,
};
pub use types::{NodeMathType, NodeSpectrumMathType, NodeVectorMathType, ShaderNodeType};

use crate::error::{Result, SvmError};
use crate::spectral::{SpectralColor, CHANNELS_PER_RAY};

/// Decode and evaluate the node at `*offset`, advancing past it and any
/// extra words it consumes
///
/// Spectral nodes use this build's `SpectralColor`.
///
/// # Errors
///
/// - `UnknownNodeType` / `UnknownOpcode` for words outside the closed sets
/// - `StackOffsetOutOfRange` when an operand or required result would
///   fall outside `stack`
/// - `ProgramOverrun` when the node or its extra word is missing
///
/// The stack is not modified when an error is returned.
pub fn svm_eval_node(program: &[SvmNode], stack: &mut [f32], offset: &mut usize) -> Result<()> {
    let start = *offset;
    let node = read_node(program, offset)?;

    let result = eval_decoded(program, stack, node, offset);
    if result.is_err() {
        *offset = start;
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(node = ?node, offset = start, error = %err, "rejected SVM node");
        }
    }
    result
}

fn eval_decoded(
    program: &[SvmNode],
    stack: &mut [f32],
    node: SvmNode,
    offset: &mut usize,
) -> Result<()> {
    let size = stack.len();

    match ShaderNodeType::try_from(node.x)? {
        ShaderNodeType::Math => {
            let ty = NodeMathType::try_from(node.y)?;
            let (a, b, c) = unpack_uchar3(node.z);
            check_stack(size, &[(a, 1), (b, 1), (c, 1), (node.w, 1)])?;
            svm_node_math(stack, ty, node.z, node.w);
        }
        ShaderNodeType::SpectrumMath => {
            let ty = NodeSpectrumMathType::try_from(node.y)?;
            let (a, b, _) = unpack_uchar3(node.z);
            let width = CHANNELS_PER_RAY;
            check_stack(size, &[(a, width), (b, width), (node.w, width)])?;
            svm_node_spectrum_math::<SpectralColor>(stack, ty, node.z, node.w);
        }
        ShaderNodeType::VectorMath => {
            let ty = NodeVectorMathType::try_from(node.y)?;
            let (a, b, scale) = unpack_uchar3(node.z);
            let (value, vector) = unpack_uchar2(node.w);
            check_stack(size, &[(a, 3), (b, 3), (scale, 1)])?;
            check_optional(size, value, 1)?;
            check_optional(size, vector, 3)?;
            if ty == NodeVectorMathType::Wrap {
                let extra = program.get(*offset).ok_or(SvmError::ProgramOverrun {
                    offset: *offset,
                    len: program.len(),
                })?;
                check_stack(size, &[(extra.x, 3)])?;
            }
            svm_node_vector_math(program, stack, ty, node.z, node.w, offset)?;
        }
        ShaderNodeType::MapRangeSpectrum => {
            let (from_min, from_max, to_min, to_max) = unpack_uchar4(node.z);
            let (result, _) = unpack_uchar2(node.w);
            let width = CHANNELS_PER_RAY;
            check_stack(
                size,
                &[
                    (node.y, width),
                    (from_min, width),
                    (from_max, width),
                    (to_min, width),
                    (to_max, width),
                    (result, width),
                ],
            )?;
            svm_node_map_range_spectrum::<SpectralColor>(stack, node.y, node.z, node.w);
        }
    }
    Ok(())
}

fn check_stack(size: usize, accesses: &[(u32, usize)]) -> Result<()> {
    for &(offset, width) in accesses {
        if offset as usize + width > size {
            return Err(SvmError::StackOffsetOutOfRange {
                offset,
                width,
                size,
            });
        }
    }
    Ok(())
}

fn check_optional(size: usize, offset: u32, width: usize) -> Result<()> {
    if stack_valid(offset) {
        check_stack(size, &[(offset, width)])
    } else {
        Ok(())
    }
}
