//! Analytical ray/solid intersection
//!
//! Both tests return the ordered pair of distances along the ray at which
//! it enters and leaves the solid. A ray whose direction has a zero
//! component divides by zero on that axis; the resulting infinities flow
//! through the min/max reductions and axis-aligned rays still resolve.

use std::f32::consts::PI;

use voxray_math::{Axis, Vec2, Vec3};

use crate::hit::HitRecord;
use crate::ray::Ray;
use crate::shapes::{Aabb, Sphere};

/// Ordered pair of signed distances along a ray, `near <= far`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub near: f32,
    pub far: f32,
}

/// Where a span lies relative to the ray origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanSide {
    /// `0 <= near`: the surface is in front of the origin
    Ahead,
    /// `near < 0 <= far`: the origin is inside the solid
    Inside,
    /// `far < 0`: the whole solid is behind the origin
    Behind,
}

impl Span {
    pub fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    pub fn side(&self) -> SpanSide {
        if self.near >= 0.0 {
            SpanSide::Ahead
        } else if self.far >= 0.0 {
            SpanSide::Inside
        } else {
            SpanSide::Behind
        }
    }

    /// The span seen from a ray running the opposite way
    pub fn reversed(&self) -> Self {
        Self::new(-self.far, -self.near)
    }

    /// First surface distance in front of the origin
    pub fn first_visible(&self) -> Option<f32> {
        match self.side() {
            SpanSide::Ahead => Some(self.near),
            SpanSide::Inside => Some(self.far),
            SpanSide::Behind => None,
        }
    }
}

/// Slab test result with the axes that bounded the span
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlabSpan {
    pub span: Span,
    /// Axis whose slab produced `near` (the entry face)
    pub entry: Axis,
    /// Axis whose slab produced `far` (the exit face)
    pub exit: Axis,
}

/// Raw slab intervals of a ray against a box, without the no-hit filter.
///
/// `near` is the largest per-axis entry distance and `far` the smallest
/// per-axis exit distance. Ties keep the earlier axis (x, then y, then z).
pub fn slabs(ray: &Ray, aabb: &Aabb) -> SlabSpan {
    let mut near = f32::NEG_INFINITY;
    let mut far = f32::INFINITY;
    let mut entry = Axis::X;
    let mut exit = Axis::X;

    for axis in Axis::ALL {
        let i = axis.index();
        let t1 = (aabb.min[i] - ray.origin[i]) / ray.direction[i];
        let t2 = (aabb.max[i] - ray.origin[i]) / ray.direction[i];
        // NaN (0/0 on a slab boundary) never wins either comparison
        let lo = t1.min(t2);
        let hi = t1.max(t2);
        if lo > near {
            near = lo;
            entry = axis;
        }
        if hi < far {
            far = hi;
            exit = axis;
        }
    }

    SlabSpan {
        span: Span::new(near, far),
        entry,
        exit,
    }
}

/// Ray versus axis-aligned box.
///
/// Returns `None` when the box is entirely behind the ray (`far < 0`) or
/// the ray misses it (`near > far`).
pub fn ray_box(ray: &Ray, aabb: &Aabb) -> Option<SlabSpan> {
    let result = slabs(ray, aabb);
    let Span { near, far } = result.span;
    if far < 0.0 || near > far {
        return None;
    }
    Some(result)
}

/// Ray versus sphere.
///
/// Solves the quadratic in its `b² - c` form, which assumes a unit
/// direction. Returns `None` when the line misses the sphere or the ray
/// has no direction; use
/// [`Span::side`] to tell a sphere ahead from one surrounding or behind
/// the origin.
pub fn ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<Span> {
    if ray.is_degenerate() {
        return None;
    }
    let oc = ray.origin - sphere.center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - sphere.radius * sphere.radius;
    let disc = b * b - c;
    if !(disc >= 0.0) {
        return None;
    }
    let root = disc.sqrt();
    Some(Span::new(-b - root, -b + root))
}

/// Face coordinates of a point on an axis-aligned face, in the face's
/// tangent order (x-face: (y, z), y-face: (z, x), z-face: (x, y)).
pub(crate) fn face_uv(local: Vec3, face: Axis) -> Vec2 {
    let (u, v) = face.tangents();
    Vec2::new(local[u], local[v]).clamp(Vec2::ZERO, Vec2::ONE)
}

fn axis_sign(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Nearest visible surface of a box.
///
/// From outside this is the entry face; from inside it is the exit face.
pub fn box_hit(ray: &Ray, aabb: &Aabb) -> Option<HitRecord> {
    let slabs = ray_box(ray, aabb)?;
    let (t, face, normal_sign) = if slabs.span.near >= 0.0 {
        (slabs.span.near, slabs.entry, -axis_sign(ray.direction[slabs.entry]))
    } else {
        (slabs.span.far, slabs.exit, axis_sign(ray.direction[slabs.exit]))
    };
    if !t.is_finite() {
        return None;
    }

    let point = ray.at(t);
    let local = (point - aabb.min) / aabb.size();
    Some(HitRecord {
        t,
        point,
        face: Some(face),
        normal: face.unit() * normal_sign,
        id: 0,
        uv: face_uv(local, face),
    })
}

/// Nearest visible surface of a sphere, with longitude/latitude UVs.
pub fn sphere_hit(ray: &Ray, sphere: &Sphere) -> Option<HitRecord> {
    let t = ray_sphere(ray, sphere)?.first_visible()?;
    let point = ray.at(t);
    let normal = sphere.normal_at(point);
    let uv = Vec2::new(
        0.5 + normal.z.atan2(normal.x) / (2.0 * PI),
        0.5 - normal.y.clamp(-1.0, 1.0).asin() / PI,
    );
    Some(HitRecord {
        t,
        point,
        face: None,
        normal,
        id: 0,
        uv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0))
    }

    #[test]
    fn test_box_diagonal_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ONE);
        let hit = ray_box(&ray, &unit_box()).expect("diagonal ray hits the box");
        let Span { near, far } = hit.span;
        assert!(near > 0.0);
        assert!(far > near);
        assert_abs_diff_eq!(near, 3.0f32.sqrt(), epsilon = 1e-5);
        assert_abs_diff_eq!(far, 2.0 * 3.0f32.sqrt(), epsilon = 1e-5);

        let entry = ray.at(near);
        let b = unit_box();
        for i in 0..3 {
            assert!(entry[i] >= b.min[i] - 1e-5 && entry[i] <= b.max[i] + 1e-5);
        }
    }

    #[test]
    fn test_box_pointing_away_misses() {
        let b = unit_box();
        let origins = [Vec3::ZERO, Vec3::new(3.0, 1.5, 1.5), Vec3::new(1.5, -4.0, 1.5)];
        for origin in origins {
            let away = origin - b.center();
            assert!(ray_box(&Ray::new(origin, away), &b).is_none(), "origin {:?}", origin);
        }
    }

    #[test]
    fn test_box_axis_aligned_ray() {
        // Two zero direction components divide by zero; must still hit
        let ray = Ray::new(Vec3::new(1.5, 1.5, -5.0), Vec3::Z);
        let hit = ray_box(&ray, &unit_box()).expect("axis-aligned ray hits");
        assert_abs_diff_eq!(hit.span.near, 6.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.span.far, 7.0, epsilon = 1e-6);
        assert_eq!(hit.entry, Axis::Z);
    }

    #[test]
    fn test_box_axis_aligned_miss() {
        let ray = Ray::new(Vec3::new(3.0, 1.5, -5.0), Vec3::Z);
        assert!(ray_box(&ray, &unit_box()).is_none());
    }

    #[test]
    fn test_box_inside_origin() {
        let ray = Ray::new(Vec3::splat(1.5), Vec3::X);
        let hit = ray_box(&ray, &unit_box()).expect("inside origin reports a span");
        assert_eq!(hit.span.side(), SpanSide::Inside);
        assert_abs_diff_eq!(hit.span.far, 0.5, epsilon = 1e-6);
        assert_eq!(hit.exit, Axis::X);
    }

    #[test]
    fn test_box_reversal_symmetry() {
        let b = unit_box();
        let ray = Ray::new(Vec3::new(1.2, 1.7, 1.4), Vec3::new(0.3, -0.5, 0.8));
        let forward = slabs(&ray, &b).span;
        let backward = slabs(&ray.reversed(), &b).span;
        let expected = forward.reversed();
        assert_abs_diff_eq!(backward.near, expected.near, epsilon = 1e-5);
        assert_abs_diff_eq!(backward.far, expected.far, epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_inside() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 2.0);
        for dir in [Vec3::X, -Vec3::Y, Vec3::new(0.3, 0.2, -1.0)] {
            let span = ray_sphere(&Ray::new(Vec3::ZERO, dir), &sphere).expect("inside always intersects");
            assert!(span.near < 0.0 && 0.0 <= span.far);
            assert_eq!(span.side(), SpanSide::Inside);
        }
    }

    #[test]
    fn test_sphere_ahead_and_behind() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ahead = ray_sphere(&Ray::new(Vec3::ZERO, -Vec3::Z), &sphere).unwrap();
        assert_abs_diff_eq!(ahead.near, 9.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ahead.far, 11.0, epsilon = 1e-5);
        assert_eq!(ahead.side(), SpanSide::Ahead);

        let behind = ray_sphere(&Ray::new(Vec3::ZERO, Vec3::Z), &sphere).unwrap();
        assert_eq!(behind.side(), SpanSide::Behind);
        assert!(sphere_hit(&Ray::new(Vec3::ZERO, Vec3::Z), &sphere).is_none());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 5.0, -10.0), 1.0);
        assert!(ray_sphere(&Ray::new(Vec3::ZERO, -Vec3::Z), &sphere).is_none());
    }

    #[test]
    fn test_sphere_reversal_symmetry() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, -3.0), 1.5);
        let ray = Ray::new(Vec3::new(0.5, 1.0, 2.0), Vec3::new(0.1, 0.2, -1.0));
        let forward = ray_sphere(&ray, &sphere).unwrap();
        let backward = ray_sphere(&ray.reversed(), &sphere).unwrap();
        assert_abs_diff_eq!(backward.near, forward.reversed().near, epsilon = 1e-4);
        assert_abs_diff_eq!(backward.far, forward.reversed().far, epsilon = 1e-4);
    }

    #[test]
    fn test_intersections_are_deterministic() {
        let ray = Ray::new(Vec3::new(0.1, 0.2, 0.3), Vec3::new(1.0, 0.9, 1.1));
        assert_eq!(ray_box(&ray, &unit_box()), ray_box(&ray, &unit_box()));
        let sphere = Sphere::new(Vec3::splat(1.5), 0.7);
        assert_eq!(ray_sphere(&ray, &sphere), ray_sphere(&ray, &sphere));
    }

    #[test]
    fn test_box_hit_face_and_uv() {
        let ray = Ray::new(Vec3::new(1.25, 1.75, -3.0), Vec3::Z);
        let hit = box_hit(&ray, &unit_box()).unwrap();
        assert_eq!(hit.face, Some(Axis::Z));
        assert_eq!(hit.normal, -Vec3::Z);
        // z-face exposes (x, y)
        assert_abs_diff_eq!(hit.uv.x, 0.25, epsilon = 1e-5);
        assert_abs_diff_eq!(hit.uv.y, 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_box_hit_from_inside_uses_exit_face() {
        let ray = Ray::new(Vec3::splat(1.5), -Vec3::Y);
        let hit = box_hit(&ray, &unit_box()).unwrap();
        assert_eq!(hit.face, Some(Axis::Y));
        assert_eq!(hit.normal, -Vec3::Y);
        assert_abs_diff_eq!(hit.t, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_direction_never_yields_a_hit() {
        let ray = Ray::new(Vec3::splat(1.5), Vec3::ZERO);
        assert!(box_hit(&ray, &unit_box()).is_none());
        assert!(sphere_hit(&ray, &Sphere::new(Vec3::splat(1.5), 1.0)).is_none());
        // Origin inside the sphere would otherwise give a positive discriminant
        assert!(ray_sphere(&ray, &Sphere::new(Vec3::splat(1.5), 1.0)).is_none());
        assert!(ray_sphere(&ray, &Sphere::new(Vec3::splat(1.0), 1.0)).is_none());
    }
}
