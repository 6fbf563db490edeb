//! Voxel grid traversal
//!
//! Amanatides & Woo style DDA over a cubic lattice `[0, side)³`. The walk
//! visits cells in the order the ray crosses them and stops at the first
//! one with a non-zero id, when it leaves the lattice, or after
//! [`MAX_DDA_STEPS`] boundary crossings.

use voxray_math::{cell_of, in_cube, Axis, IVec3, Vec2, Vec3};

use crate::hit::HitRecord;
use crate::intersect::{face_uv, ray_box};
use crate::ray::Ray;
use crate::shapes::Aabb;

/// Maximum number of boundary crossings per traversal.
///
/// Cells further than this many crossings from the start (or from the
/// lattice entry point) are never reported, even when occupied.
pub const MAX_DDA_STEPS: u32 = 50;

/// Read access to a cubic lattice of voxel ids
pub trait VoxelGrid {
    /// Cells per axis
    fn side(&self) -> i32;

    /// Id stored at `cell`, zero for empty. Only called for in-bounds cells.
    fn cell_id(&self, cell: IVec3) -> u32;
}

/// A lattice backed by a flat id slice laid out `x*N² + y*N + z`
#[derive(Clone, Copy, Debug)]
pub struct FlatGrid<'a> {
    ids: &'a [u32],
    side: i32,
}

impl<'a> FlatGrid<'a> {
    /// Wrap `ids`; `None` if the slice does not hold exactly `side³` cells
    pub fn new(ids: &'a [u32], side: i32) -> Option<Self> {
        let n = usize::try_from(side).ok()?;
        (ids.len() == n * n * n).then_some(Self { ids, side })
    }
}

impl VoxelGrid for FlatGrid<'_> {
    fn side(&self) -> i32 {
        self.side
    }

    fn cell_id(&self, cell: IVec3) -> u32 {
        let n = self.side as usize;
        self.ids[cell.x as usize * n * n + cell.y as usize * n + cell.z as usize]
    }
}

/// First occupied cell found by [`traverse`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelHit {
    /// Lattice coordinates of the occupied cell
    pub cell: IVec3,
    /// Axis of the boundary crossed to enter the cell
    pub face: Axis,
    /// Step direction (±1) along `face`
    pub step: i32,
    pub id: u32,
    /// Boundary crossings taken, 0 if the entry cell itself was occupied
    pub steps: u32,
    /// Distance from the ray origin to `point`
    pub t: f32,
    /// Exact hit point on the crossed face plane
    pub point: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl From<VoxelHit> for HitRecord {
    fn from(hit: VoxelHit) -> Self {
        HitRecord {
            t: hit.t,
            point: hit.point,
            face: Some(hit.face),
            normal: hit.normal,
            id: hit.id,
            uv: hit.uv,
        }
    }
}

fn step_sign(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

struct DdaState {
    cell: IVec3,
    step: IVec3,
    delta: Vec3,
    side_dist: Vec3,
    budget: u32,
    remaining: u32,
}

impl DdaState {
    fn new(start: Vec3, direction: Vec3, cell: IVec3) -> Self {
        let step = IVec3::new(
            step_sign(direction.x),
            step_sign(direction.y),
            step_sign(direction.z),
        );
        let delta = direction.recip().abs();

        let mut side_dist = Vec3::ZERO;
        for axis in Axis::ALL {
            let i = axis.index();
            let c = cell[axis] as f32;
            let to_boundary = if step[axis] > 0 {
                c + 1.0 - start[i]
            } else {
                start[i] - c
            };
            let dist = to_boundary * delta[i];
            // 0 * inf on an axis the ray never moves along
            side_dist[i] = if dist.is_nan() { f32::INFINITY } else { dist };
        }

        Self {
            cell,
            step,
            delta,
            side_dist,
            budget: MAX_DDA_STEPS,
            remaining: MAX_DDA_STEPS,
        }
    }

    fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self.remaining = budget;
        self
    }

    /// Axis whose boundary is crossed next; ties go x, then y, then z
    fn next_axis(&self) -> Axis {
        let s = self.side_dist;
        if s.x <= s.y && s.x <= s.z {
            Axis::X
        } else if s.y <= s.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Cross one boundary, returning the axis crossed, or `None` once the
    /// budget is spent.
    fn advance(&mut self) -> Option<Axis> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let axis = self.next_axis();
        self.cell[axis] += self.step[axis];
        self.side_dist[axis.index()] += self.delta[axis.index()];
        Some(axis)
    }

    fn steps_taken(&self) -> u32 {
        self.budget - self.remaining
    }
}

/// Intersect `ray` with the face of `cell` that was crossed along `face`.
fn resolve_hit(ray: &Ray, cell: IVec3, face: Axis, step: i32, id: u32, steps: u32) -> VoxelHit {
    let i = face.index();
    let plane = if step > 0 {
        cell[face] as f32
    } else {
        cell[face] as f32 + 1.0
    };
    let t = (plane - ray.origin[i]) / ray.direction[i];
    let mut point = ray.at(t);
    point[i] = plane;

    VoxelHit {
        cell,
        face,
        step,
        id,
        steps,
        t,
        point,
        normal: face.unit() * -(step as f32),
        uv: face_uv(point - cell.as_vec3(), face),
    }
}

/// True when the origin lies on a lattice face and the ray heads into the
/// lattice through it.
fn enters_through_surface(ray: &Ray, side: i32) -> bool {
    let side = side as f32;
    Axis::ALL.into_iter().any(|axis| {
        let (o, d) = (ray.origin[axis], ray.direction[axis]);
        (o == 0.0 && d > 0.0) || (o == side && d < 0.0)
    })
}

/// Walk `ray` through `grid` and return the first occupied cell.
///
/// A ray starting outside the lattice, or on its surface heading inward, is
/// first advanced to its entry point on the lattice bounds; the entry cell
/// is checked before any step is taken. A ray starting inside never reports
/// the cell it starts in.
pub fn traverse<G: VoxelGrid + ?Sized>(ray: &Ray, grid: &G) -> Option<VoxelHit> {
    traverse_with_budget(ray, grid, MAX_DDA_STEPS)
}

/// Boundary crossings that always suffice to leave a lattice of `side` cells
pub fn full_crossings(side: i32) -> u32 {
    3 * side.max(0) as u32 + 3
}

/// [`traverse`] with an explicit crossing budget.
///
/// A budget of [`full_crossings`] visits every cell on the ray's path.
pub fn traverse_with_budget<G: VoxelGrid + ?Sized>(
    ray: &Ray,
    grid: &G,
    max_steps: u32,
) -> Option<VoxelHit> {
    if ray.is_degenerate() {
        return None;
    }
    let side = grid.side();
    if side <= 0 {
        return None;
    }
    let bounds = Aabb::cube(side as f32);
    let clamp_cell = |p: Vec3| {
        cell_of(p).clamp(IVec3::ZERO, IVec3::splat(side - 1))
    };

    let mut state = if bounds.contains(ray.origin) && !enters_through_surface(ray, side) {
        DdaState::new(ray.origin, ray.direction, clamp_cell(ray.origin)).with_budget(max_steps)
    } else {
        let entry = ray_box(ray, &bounds)?;
        let start = ray.at(entry.span.near.max(0.0));
        let cell = clamp_cell(start);
        let state = DdaState::new(start, ray.direction, cell).with_budget(max_steps);

        let id = grid.cell_id(cell);
        if id != 0 {
            let face = entry.entry;
            return Some(resolve_hit(ray, cell, face, state.step[face], id, 0));
        }
        state
    };

    while let Some(axis) = state.advance() {
        if !in_cube(state.cell, side) {
            return None;
        }
        let id = grid.cell_id(state.cell);
        if id != 0 {
            let step = state.step[axis];
            return Some(resolve_hit(ray, state.cell, axis, step, id, state.steps_taken()));
        }
    }
    None
}
