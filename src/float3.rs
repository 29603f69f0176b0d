//! Three-component `f32` vector
//!
//! Used for shader vectors (positions, normals, directions) and as the
//! 3-channel `SpectralColor` representation. All lane-wise helpers go
//! through `crate::math` so they agree with `Float8` per lane.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Float3 {
    /// Build from three components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Broadcast `f` to every component
    #[inline]
    pub const fn splat(f: f32) -> Self {
        Self::new(f, f, f)
    }

    /// All components `0.0`
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// All components `1.0`
    #[inline]
    pub const fn one() -> Self {
        Self::splat(1.0)
    }

    /// Read three consecutive floats
    ///
    /// # Panics
    ///
    /// Panics if `v` holds fewer than three elements.
    #[inline]
    pub fn load(v: &[f32]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// # Panics
    ///
    /// Panics if `v` holds fewer than three elements.
    #[inline]
    pub fn store(self, v: &mut [f32]) {
        v[..3].copy_from_slice(&self.to_array());
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    pub fn zip(self, o: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(f(self.x, o.x), f(self.y, o.y), f(self.z, o.z))
    }

    #[inline]
    pub fn dot(self, o: Self) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    #[inline]
    pub fn cross(self, o: Self) -> Self {
        Self::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    #[inline]
    pub fn len_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn len(self) -> f32 {
        self.len_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, o: Self) -> f32 {
        (self - o).len()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        self / self.len()
    }

    /// Unit vector, or zero for a zero-length input
    #[inline]
    pub fn safe_normalize(self) -> Self {
        let t = self.len();
        if t != 0.0 {
            self * (1.0 / t)
        } else {
            self
        }
    }

    /// Mirror `self` about the plane with normal `n` (need not be unit length)
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        let unit = n.normalize();
        self - unit * (2.0 * self.dot(unit))
    }

    /// Projection of `self` onto `b`, zero when `b` has zero length
    #[inline]
    pub fn project(self, b: Self) -> Self {
        let len_squared = b.len_squared();
        if len_squared != 0.0 {
            b * (self.dot(b) / len_squared)
        } else {
            Self::zero()
        }
    }

    #[inline]
    pub fn min(self, o: Self) -> Self {
        self.zip(o, math::min)
    }

    #[inline]
    pub fn max(self, o: Self) -> Self {
        self.zip(o, math::max)
    }

    #[inline]
    pub fn clamp(self, mn: Self, mx: Self) -> Self {
        self.max(mn).min(mx)
    }

    #[inline]
    pub fn saturate(self) -> Self {
        self.map(math::saturate)
    }

    #[inline]
    pub fn fabs(self) -> Self {
        self.map(f32::abs)
    }

    #[inline]
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    #[inline]
    pub fn fract(self) -> Self {
        self.map(math::fractf)
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    #[inline]
    pub fn safe_rcp(self) -> Self {
        self.map(math::safe_rcp)
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.map(f32::sin)
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.map(f32::cos)
    }

    #[inline]
    pub fn tan(self) -> Self {
        self.map(f32::tan)
    }

    #[inline]
    pub fn exp(self) -> Self {
        self.map(f32::exp)
    }

    #[inline]
    pub fn log(self) -> Self {
        self.map(f32::ln)
    }

    #[inline]
    pub fn pow(self, e: Self) -> Self {
        self.zip(e, f32::powf)
    }

    #[inline]
    pub fn mix(self, b: Self, t: f32) -> Self {
        self + (b - self) * t
    }

    /// Lane-wise division with `0` wherever the denominator lane is `0`
    #[inline]
    pub fn safe_divide(self, b: Self) -> Self {
        self.zip(b, math::safe_divide)
    }

    #[inline]
    pub fn safe_modulo(self, b: Self) -> Self {
        self.zip(b, math::safe_modulo)
    }

    /// Round each lane down to a multiple of the matching lane of `b`
    #[inline]
    pub fn snap(self, b: Self) -> Self {
        self.zip(b, math::snapf)
    }

    /// Wrap each lane into `[min, max)`
    #[inline]
    pub fn wrap(self, max: Self, min: Self) -> Self {
        Self::new(
            math::wrapf(self.x, max.x, min.x),
            math::wrapf(self.y, max.y, min.y),
            math::wrapf(self.z, max.z, min.z),
        )
    }

    #[inline]
    pub fn average(self) -> f32 {
        (self.x + self.y + self.z) * (1.0 / 3.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::zero()
    }

    #[inline]
    pub fn ensure_finite(self) -> Self {
        self.map(math::ensure_finite)
    }

    #[inline]
    pub fn isfinite_safe(self) -> bool {
        math::isfinite_safe(self.x) && math::isfinite_safe(self.y) && math::isfinite_safe(self.z)
    }
}

impl From<f32> for Float3 {
    #[inline]
    fn from(f: f32) -> Self {
        Self::splat(f)
    }
}

impl Index<usize> for Float3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Float3 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Float3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Float3 index out of range: {i}"),
        }
    }
}

impl Neg for Float3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Float3 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a $op b)
            }
        }

        impl $trait<f32> for Float3 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f32) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<Float3> for f32 {
            type Output = Float3;

            #[inline]
            fn $method(self, rhs: Float3) -> Float3 {
                rhs.map(|b| self $op b)
            }
        }

        impl $assign_trait for Float3 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl $assign_trait<f32> for Float3 {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_binary_op!(Div, div, DivAssign, div_assign, /);
