//! Instruction words and operand packing
//!
//! An instruction is four `u32` words. Operand offsets are packed into a
//! word as consecutive bytes, lowest byte first.

use crate::error::{Result, SvmError};

/// One four-word SVM instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvmNode {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
}

impl SvmNode {
    pub const fn new(x: u32, y: u32, z: u32, w: u32) -> Self {
        Self { x, y, z, w }
    }
}

/// Read the instruction at `*offset` and advance the cursor past it
pub fn read_node(program: &[SvmNode], offset: &mut usize) -> Result<SvmNode> {
    let node = program
        .get(*offset)
        .copied()
        .ok_or(SvmError::ProgramOverrun {
            offset: *offset,
            len: program.len(),
        })?;
    *offset += 1;
    Ok(node)
}

#[inline]
pub fn unpack_uchar2(i: u32) -> (u32, u32) {
    (i & 0xFF, (i >> 8) & 0xFF)
}

#[inline]
pub fn unpack_uchar3(i: u32) -> (u32, u32, u32) {
    (i & 0xFF, (i >> 8) & 0xFF, (i >> 16) & 0xFF)
}

#[inline]
pub fn unpack_uchar4(i: u32) -> (u32, u32, u32, u32) {
    (i & 0xFF, (i >> 8) & 0xFF, (i >> 16) & 0xFF, i >> 24)
}

/// Pack up to four byte-sized operands into one word
///
/// # Panics
///
/// Panics in debug builds if an operand does not fit in a byte.
#[inline]
pub fn encode_uchar4(x: u32, y: u32, z: u32, w: u32) -> u32 {
    debug_assert!(x < 256 && y < 256 && z < 256 && w < 256);
    x | (y << 8) | (z << 16) | (w << 24)
}
