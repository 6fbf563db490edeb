//! Primitive shapes
//!
//! The same shapes serve the analytical intersection tests and the SDF
//! scene, so each one knows its signed distance and surface normal.

use voxray_math::{Axis, Vec3};

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Signed distance: negative inside, zero on the surface
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.center).length() - self.radius
    }

    /// Outward surface normal at (or near) `point`
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}

/// An axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Cube spanning `[0, side]` on every axis
    pub fn cube(side: f32) -> Self {
        Self::new(Vec3::ZERO, Vec3::splat(side))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Signed distance to the box surface
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        let q = (point - self.center()).abs() - self.half_extents();
        let outside = q.max(Vec3::ZERO).length();
        let inside = q.max_element().min(0.0);
        outside + inside
    }

    /// Outward normal of the face closest to `point`
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        let local = (point - self.center()) / self.half_extents();
        let a = local.abs();
        let axis = if a.x >= a.y && a.x >= a.z {
            Axis::X
        } else if a.y >= a.z {
            Axis::Y
        } else {
            Axis::Z
        };
        let sign = if local[axis] < 0.0 { -1.0 } else { 1.0 };
        axis.unit() * sign
    }

    /// Translate the AABB by a delta
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// An infinite plane defined by normal and distance from origin
///
/// The plane equation is: normal · point = distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Unit normal vector pointing to the positive side
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane; the normal is normalized.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            distance,
        }
    }

    /// Horizontal ground plane at height `y`, facing up
    pub fn ground(y: f32) -> Self {
        Self::new(Vec3::Y, y)
    }

    /// Positive above the plane, negative below
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Any of the primitive shapes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Box(Aabb),
    Plane(Plane),
}

impl Shape {
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        match self {
            Shape::Sphere(s) => s.signed_distance(point),
            Shape::Box(b) => b.signed_distance(point),
            Shape::Plane(p) => p.signed_distance(point),
        }
    }

    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Box(b) => b.normal_at(point),
            Shape::Plane(p) => p.normal,
        }
    }
}
