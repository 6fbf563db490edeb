//! Coordinate axes

use std::ops::{Index, IndexMut};

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes
///
/// Used to name the face a ray crossed and to index vector components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in priority order (x before y before z)
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two remaining axes in face order: x -> (y, z), y -> (z, x), z -> (x, y)
    #[inline]
    pub const fn tangents(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Unit vector along this axis
    #[inline]
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

impl Index<Axis> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, axis: Axis) -> &f32 {
        &self[axis.index()]
    }
}

impl IndexMut<Axis> for Vec3 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut f32 {
        &mut self[axis.index()]
    }
}

impl Index<Axis> for IVec3 {
    type Output = i32;
    #[inline]
    fn index(&self, axis: Axis) -> &i32 {
        &self[axis.index()]
    }
}

impl IndexMut<Axis> for IVec3 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        &mut self[axis.index()]
    }
}
