//! Pure per-opcode math shared by the scalar and vector math nodes

use super::types::{NodeMathType, NodeVectorMathType};
use crate::float3::Float3;
use crate::math::*;

/// Evaluate one scalar math opcode
///
/// `c` is only read by the three-operand operations (`Wrap`, `Compare`,
/// `MultiplyAdd`, `SmoothMin`, `SmoothMax`).
pub fn svm_math(ty: NodeMathType, a: f32, b: f32, c: f32) -> f32 {
    match ty {
        NodeMathType::Add => a + b,
        NodeMathType::Subtract => a - b,
        NodeMathType::Multiply => a * b,
        NodeMathType::Divide => safe_divide(a, b),
        NodeMathType::Power => safe_powf(a, b),
        NodeMathType::Logarithm => safe_logf(a, b),
        NodeMathType::Sqrt => safe_sqrtf(a),
        NodeMathType::InvSqrt => inversesqrtf(a),
        NodeMathType::Absolute => a.abs(),
        NodeMathType::Radians => deg2radf(a),
        NodeMathType::Degrees => rad2degf(a),
        NodeMathType::Minimum => a.min(b),
        NodeMathType::Maximum => a.max(b),
        NodeMathType::LessThan => bool_to_float(a < b),
        NodeMathType::GreaterThan => bool_to_float(a > b),
        NodeMathType::Round => roundf_half_up(a),
        NodeMathType::Floor => a.floor(),
        NodeMathType::Ceil => a.ceil(),
        NodeMathType::Fraction => fractf(a),
        NodeMathType::Modulo => safe_modulo(a, b),
        NodeMathType::Trunc => truncf(a),
        NodeMathType::Snap => snapf(a, b),
        NodeMathType::Wrap => wrapf(a, b, c),
        NodeMathType::Pingpong => pingpongf(a, b),
        NodeMathType::Sine => a.sin(),
        NodeMathType::Cosine => a.cos(),
        NodeMathType::Tangent => a.tan(),
        NodeMathType::Sinh => a.sinh(),
        NodeMathType::Cosh => a.cosh(),
        NodeMathType::Tanh => a.tanh(),
        NodeMathType::Arcsine => safe_asinf(a),
        NodeMathType::Arccosine => safe_acosf(a),
        NodeMathType::Arctangent => a.atan(),
        NodeMathType::Arctan2 => a.atan2(b),
        NodeMathType::Sign => compatible_signf(a),
        NodeMathType::Exponent => a.exp(),
        NodeMathType::Compare => {
            bool_to_float(a == b || (a - b).abs() <= c.max(f32::EPSILON))
        }
        NodeMathType::MultiplyAdd => a * b + c,
        NodeMathType::SmoothMin => smoothminf(a, b, c),
        NodeMathType::SmoothMax => -smoothminf(-a, -b, c),
    }
}

/// Evaluate one vector math opcode, returning `(value, vector)`
///
/// Operations that produce only a vector leave `value` at `0.0`; operations
/// that produce only a scalar leave `vector` at zero. `c` is only read by
/// `Wrap` and `scale` only by `Scale`.
pub fn svm_vector_math(
    ty: NodeVectorMathType,
    a: Float3,
    b: Float3,
    c: Float3,
    scale: f32,
) -> (f32, Float3) {
    let mut value = 0.0;
    let mut vector = Float3::zero();

    match ty {
        NodeVectorMathType::Add => vector = a + b,
        NodeVectorMathType::Subtract => vector = a - b,
        NodeVectorMathType::Multiply => vector = a * b,
        NodeVectorMathType::Divide => vector = a.safe_divide(b),
        NodeVectorMathType::CrossProduct => vector = a.cross(b),
        NodeVectorMathType::Project => vector = a.project(b),
        NodeVectorMathType::Reflect => vector = a.reflect(b),
        NodeVectorMathType::DotProduct => value = a.dot(b),
        NodeVectorMathType::Distance => value = a.distance(b),
        NodeVectorMathType::Length => value = a.len(),
        NodeVectorMathType::Scale => vector = a * scale,
        NodeVectorMathType::Normalize => vector = a.safe_normalize(),
        NodeVectorMathType::Snap => vector = a.snap(b),
        NodeVectorMathType::Floor => vector = a.floor(),
        NodeVectorMathType::Ceil => vector = a.ceil(),
        NodeVectorMathType::Modulo => vector = a.safe_modulo(b),
        NodeVectorMathType::Wrap => vector = a.wrap(b, c),
        NodeVectorMathType::Fraction => vector = a.fract(),
        NodeVectorMathType::Absolute => vector = a.fabs(),
        NodeVectorMathType::Minimum => vector = a.min(b),
        NodeVectorMathType::Maximum => vector = a.max(b),
        NodeVectorMathType::Sine => vector = a.sin(),
        NodeVectorMathType::Cosine => vector = a.cos(),
        NodeVectorMathType::Tangent => vector = a.tan(),
    }

    (value, vector)
}

#[inline]
fn bool_to_float(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}
