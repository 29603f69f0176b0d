//! Map Range Spectrum node
//!
//! Linearly remaps a spectral value from `[from_min, from_max]` to
//! `[to_min, to_max]` channel by channel. A zero-width source range maps to
//! `to_min`. With clamping on, each channel is limited to the destination
//! range, which may be given in either order.

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::node::{unpack_uchar2, unpack_uchar4};
use super::stack::{stack_load_spectral, stack_store_spectral};
use crate::spectral::Spectrum;

/// Node default for `use_clamp` when the node is created
pub const MAP_RANGE_DEFAULT_CLAMP: bool = true;

/// Remap one spectral value
pub fn map_range_spectrum<S: Spectrum>(
    value: S,
    from_min: S,
    from_max: S,
    to_min: S,
    to_max: S,
    use_clamp: bool,
) -> S {
    let factor = (value - from_min).safe_divide(from_max - from_min);
    let result = to_min + factor * (to_max - to_min);

    if use_clamp {
        let lo = to_min.min(to_max);
        let hi = to_min.max(to_max);
        result.max(lo).min(hi)
    } else {
        result
    }
}

/// Map Range Spectrum node
///
/// `parameter_stack_offsets` packs `(from_min, from_max, to_min, to_max)`;
/// `result_stack_offsets` packs `(result, use_clamp)`.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(stack)))]
pub fn svm_node_map_range_spectrum<S: Spectrum>(
    stack: &mut [f32],
    value_stack_offset: u32,
    parameter_stack_offsets: u32,
    result_stack_offsets: u32,
) {
    let (from_min_offset, from_max_offset, to_min_offset, to_max_offset) =
        unpack_uchar4(parameter_stack_offsets);
    let (result_offset, use_clamp) = unpack_uchar2(result_stack_offsets);

    let value: S = stack_load_spectral(stack, value_stack_offset);
    let from_min: S = stack_load_spectral(stack, from_min_offset);
    let from_max: S = stack_load_spectral(stack, from_max_offset);
    let to_min: S = stack_load_spectral(stack, to_min_offset);
    let to_max: S = stack_load_spectral(stack, to_max_offset);

    let result = map_range_spectrum(value, from_min, from_max, to_min, to_max, use_clamp != 0);
    stack_store_spectral(stack, result_offset, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float3::Float3;
    use crate::float8::Float8;
    use crate::svm::node::encode_uchar4;

    #[test]
    fn test_map_range_identity() {
        let v = Float3::new(0.1, 0.5, 0.9);
        let r = map_range_spectrum(
            v,
            Float3::zero(),
            Float3::one(),
            Float3::zero(),
            Float3::one(),
            MAP_RANGE_DEFAULT_CLAMP,
        );
        assert_eq!(r, v);
    }

    #[test]
    fn test_map_range_scales_and_offsets() {
        let r = map_range_spectrum(0.5f32, 0.0, 1.0, 10.0, 20.0, false);
        assert_eq!(r, 15.0);
    }

    #[test]
    fn test_map_range_clamp() {
        assert_eq!(map_range_spectrum(2.0f32, 0.0, 1.0, 10.0, 20.0, true), 20.0);
        assert_eq!(map_range_spectrum(2.0f32, 0.0, 1.0, 10.0, 20.0, false), 30.0);
        // Reversed destination range clamps to the same interval
        assert_eq!(map_range_spectrum(2.0f32, 0.0, 1.0, 20.0, 10.0, true), 10.0);
        assert_eq!(map_range_spectrum(-1.0f32, 0.0, 1.0, 20.0, 10.0, true), 20.0);
    }

    #[test]
    fn test_map_range_degenerate_source() {
        let r = map_range_spectrum(
            Float8::splat(0.7),
            Float8::splat(0.5),
            Float8::splat(0.5),
            Float8::splat(2.0),
            Float8::splat(4.0),
            true,
        );
        assert_eq!(r, Float8::splat(2.0));
    }

    #[test]
    fn test_map_range_node() {
        let mut stack = vec![0.0; 16];
        stack[0] = 0.25; // value
        stack[1] = 0.0; // from_min
        stack[2] = 1.0; // from_max
        stack[3] = -1.0; // to_min
        stack[4] = 1.0; // to_max

        svm_node_map_range_spectrum::<f32>(
            &mut stack,
            0,
            encode_uchar4(1, 2, 3, 4),
            encode_uchar4(8, 1, 0, 0),
        );
        assert_eq!(stack[8], -0.5);
    }
}
