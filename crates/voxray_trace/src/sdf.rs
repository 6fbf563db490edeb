//! Fixed-step SDF raymarching
//!
//! The marcher samples the scene at evenly spaced points along the ray
//! and stops at the first sample that lies inside a primitive. It does not
//! use the distance value to skip ahead; the step is always [`SDF_STEP`].

use voxray_math::Vec3;

use crate::ray::Ray;
use crate::shapes::{Aabb, Plane, Shape, Sphere};

/// Number of samples taken along each ray
pub const SDF_MAX_STEPS: u32 = 256;

/// Distance between consecutive samples, in world units
pub const SDF_STEP: f32 = 0.05;

/// A union of primitive distance fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SdfScene {
    pub primitives: Vec<Shape>,
}

/// First sample found inside the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SdfHit {
    /// Distance along the ray (`step * SDF_STEP`)
    pub t: f32,
    pub point: Vec3,
    /// Index of the primitive that produced the minimum distance
    pub primitive: usize,
    /// Sample index at which the hit was found
    pub step: u32,
    /// Fraction of the march budget left at the hit, in `(0, 1]`
    pub fog: f32,
}

impl SdfScene {
    pub fn new(primitives: Vec<Shape>) -> Self {
        Self { primitives }
    }

    /// Scene with only a ground plane at height `y`
    pub fn ground(y: f32) -> Self {
        Self::new(vec![Shape::Plane(Plane::ground(y))])
    }

    /// Ground plane with two spheres and a box, laid out around `origin`
    pub fn demo_at(origin: Vec3) -> Self {
        Self::new(vec![
            Shape::Plane(Plane::ground(origin.y)),
            Shape::Sphere(Sphere::new(origin + Vec3::new(0.0, 2.0, 0.0), 1.5)),
            Shape::Sphere(Sphere::new(origin + Vec3::new(3.0, 1.0, -2.0), 1.0)),
            Shape::Box(Aabb::from_center_half_extents(
                origin + Vec3::new(-3.0, 1.0, -2.0),
                Vec3::ONE,
            )),
        ])
    }

    pub fn push(&mut self, shape: Shape) {
        self.primitives.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Minimum signed distance at `point` and the primitive that produced it.
    ///
    /// On equal distances the earlier primitive wins. NaN distances are
    /// ignored. `None` for an empty scene or when every distance is NaN.
    pub fn evaluate(&self, point: Vec3) -> Option<(f32, usize)> {
        let mut best: Option<(f32, usize)> = None;
        for (index, shape) in self.primitives.iter().enumerate() {
            let d = shape.signed_distance(point);
            if d.is_nan() {
                continue;
            }
            match best {
                Some((min, _)) if !(d < min) => {}
                _ => best = Some((d, index)),
            }
        }
        best
    }

    /// Surface normal of primitive `index` at `point`
    pub fn normal_at(&self, index: usize, point: Vec3) -> Option<Vec3> {
        self.primitives.get(index).map(|shape| shape.normal_at(point))
    }
}

/// March `ray` through `scene` and return the first sample inside it.
pub fn march(ray: &Ray, scene: &SdfScene) -> Option<SdfHit> {
    if ray.is_degenerate() || scene.is_empty() {
        return None;
    }
    for step in 0..SDF_MAX_STEPS {
        let t = step as f32 * SDF_STEP;
        let point = ray.at(t);
        let Some((distance, primitive)) = scene.evaluate(point) else {
            return None;
        };
        if distance < 0.0 {
            return Some(SdfHit {
                t,
                point,
                primitive,
                step,
                fog: (SDF_MAX_STEPS - step) as f32 / SDF_MAX_STEPS as f32,
            });
        }
    }
    None
}
