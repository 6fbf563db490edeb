//! Ray representation

use voxray_math::Vec3;

/// A ray in 3D space defined by origin and unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction (zero if the ray was built from a zero vector)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray; the direction is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from `from` toward `to`
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Point at parameter `t`: `origin + t * direction`
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same line traversed the other way
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }

    /// Same direction, origin moved to `origin`
    #[inline]
    pub fn with_origin(&self, origin: Vec3) -> Self {
        Self {
            origin,
            direction: self.direction,
        }
    }

    /// True when the direction has no usable length
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.direction.length_squared() > 0.0)
    }
}
