//! Node types and opcode enums of the math nodes
//!
//! Every enum is closed: raw instruction words convert through `TryFrom<u32>`
//! and unknown values are rejected at decode time, so the evaluators can
//! match exhaustively.

use crate::error::SvmError;

/// Define a `#[repr(u32)]` opcode enum with a checked `TryFrom<u32>`
macro_rules! opcode_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Every variant in encoding order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
        }

        impl TryFrom<u32> for $name {
            type Error = SvmError;

            fn try_from(value: u32) -> Result<Self, SvmError> {
                match value {
                    $(v if v == $name::$variant as u32 => Ok($name::$variant),)+
                    _ => Err(SvmError::UnknownOpcode {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for u32 {
            fn from(op: $name) -> u32 {
                op as u32
            }
        }
    };
}

/// Node kinds this crate evaluates (first word of an instruction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ShaderNodeType {
    Math = 1,
    VectorMath = 2,
    SpectrumMath = 3,
    MapRangeSpectrum = 4,
}

impl TryFrom<u32> for ShaderNodeType {
    type Error = SvmError;

    fn try_from(value: u32) -> Result<Self, SvmError> {
        match value {
            1 => Ok(Self::Math),
            2 => Ok(Self::VectorMath),
            3 => Ok(Self::SpectrumMath),
            4 => Ok(Self::MapRangeSpectrum),
            _ => Err(SvmError::UnknownNodeType(value)),
        }
    }
}

opcode_enum! {
    /// Scalar math node operations
    NodeMathType {
        Add = 0,
        Subtract = 1,
        Multiply = 2,
        Divide = 3,
        Sine = 4,
        Cosine = 5,
        Tangent = 6,
        Arcsine = 7,
        Arccosine = 8,
        Arctangent = 9,
        Power = 10,
        Logarithm = 11,
        Minimum = 12,
        Maximum = 13,
        Round = 14,
        LessThan = 15,
        GreaterThan = 16,
        Modulo = 17,
        Absolute = 18,
        Arctan2 = 19,
        Floor = 20,
        Ceil = 21,
        Fraction = 22,
        Sqrt = 23,
        InvSqrt = 24,
        Sign = 25,
        Exponent = 26,
        Radians = 27,
        Degrees = 28,
        Sinh = 29,
        Cosh = 30,
        Tanh = 31,
        Trunc = 32,
        Snap = 33,
        Wrap = 34,
        Compare = 35,
        MultiplyAdd = 36,
        Pingpong = 37,
        SmoothMin = 38,
        SmoothMax = 39,
    }
}

opcode_enum! {
    /// Channel-wise spectral math node operations
    NodeSpectrumMathType {
        Add = 0,
        Subtract = 1,
        Multiply = 2,
        /// Safe division, zero where the divisor channel is zero
        Divide = 3,
        Power = 4,
        /// Natural logarithm of `a`
        Logarithm = 5,
        Sqrt = 6,
        /// `safe_rcp(sqrt(a))`
        InvSqrt = 7,
        Absolute = 8,
        Exponent = 9,
        Minimum = 10,
        Maximum = 11,
        LessThan = 12,
        GreaterThan = 13,
        Sign = 14,
        Sine = 15,
        Cosine = 16,
        Tangent = 17,
    }
}

opcode_enum! {
    /// Vector math node operations
    NodeVectorMathType {
        Add = 0,
        Subtract = 1,
        Multiply = 2,
        Divide = 3,
        CrossProduct = 4,
        Project = 5,
        Reflect = 6,
        DotProduct = 7,
        Distance = 8,
        Length = 9,
        Scale = 10,
        Normalize = 11,
        Snap = 12,
        Floor = 13,
        Ceil = 14,
        Modulo = 15,
        Fraction = 16,
        Absolute = 17,
        Minimum = 18,
        Maximum = 19,
        /// Needs a third vector operand from an extra instruction word
        Wrap = 20,
        Sine = 21,
        Cosine = 22,
        Tangent = 23,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        for &op in NodeMathType::ALL {
            assert_eq!(NodeMathType::try_from(u32::from(op)), Ok(op));
        }
        for &op in NodeSpectrumMathType::ALL {
            assert_eq!(NodeSpectrumMathType::try_from(u32::from(op)), Ok(op));
        }
        for &op in NodeVectorMathType::ALL {
            assert_eq!(NodeVectorMathType::try_from(u32::from(op)), Ok(op));
        }
    }

    #[test]
    fn test_opcode_counts() {
        assert_eq!(NodeMathType::ALL.len(), 40);
        assert_eq!(NodeSpectrumMathType::ALL.len(), 18);
        assert_eq!(NodeVectorMathType::ALL.len(), 24);
    }

    #[test]
    fn test_unknown_opcode_rejected() {
        assert_eq!(
            NodeSpectrumMathType::try_from(18),
            Err(SvmError::UnknownOpcode {
                kind: "NodeSpectrumMathType",
                value: 18,
            })
        );
        assert!(NodeMathType::try_from(40).is_err());
        assert!(NodeVectorMathType::try_from(u32::MAX).is_err());
    }

    #[test]
    fn test_node_type_decode() {
        assert_eq!(ShaderNodeType::try_from(3), Ok(ShaderNodeType::SpectrumMath));
        assert_eq!(
            ShaderNodeType::try_from(0),
            Err(SvmError::UnknownNodeType(0))
        );
    }
}
