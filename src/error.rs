//! Error types for SVM node decoding
//!
//! Numeric kernels never fail: zero denominators and non-finite values are
//! handled by substitution. Errors only surface when a raw instruction is
//! decoded and its node type, opcode, or stack offsets cannot be trusted.

use thiserror::Error;

/// Result type for node decoding
pub type Result<T> = std::result::Result<T, SvmError>;

/// Errors raised while decoding an SVM instruction stream
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SvmError {
    /// Node type word does not name a node this crate evaluates
    #[error("Unknown node type: {0}")]
    UnknownNodeType(u32),

    /// Opcode outside the closed set of the given enum
    #[error("Unknown {kind} opcode: {value}")]
    UnknownOpcode {
        /// Name of the opcode enum
        kind: &'static str,
        /// Raw opcode value
        value: u32,
    },

    /// Operand or result offset does not fit in the evaluation stack
    #[error("Stack offset {offset} (+{width}) out of range for stack of size {size}")]
    StackOffsetOutOfRange {
        /// Requested offset
        offset: u32,
        /// Number of floats accessed
        width: usize,
        /// Stack size
        size: usize,
    },

    /// Instruction needed an extra word past the end of the program
    #[error("Program overrun: node {offset} requested, program has {len}")]
    ProgramOverrun {
        /// Cursor position of the missing node
        offset: usize,
        /// Program length in nodes
        len: usize,
    },
}
