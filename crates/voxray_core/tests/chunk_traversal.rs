//! Integration tests: tracing rays through chunks built by the core crate

use voxray_core::{sphere_universe, Block, Chunk, IVec3, Universe};
use voxray_math::{Axis, Vec3};
use voxray_trace::{traverse, Ray, MAX_DDA_STEPS};

#[test]
fn test_sphere_universe_seen_from_front() {
    let universe = sphere_universe();
    let chunk = universe.chunk(IVec3::ZERO).unwrap();

    let ray = Ray::new(Vec3::new(16.5, 16.5, 60.0), -Vec3::Z);
    let hit = traverse(&ray, chunk).expect("ball fills the chunk center");

    assert_eq!(hit.cell, IVec3::new(16, 16, 31));
    assert_eq!(hit.face, Axis::Z);
    assert_eq!(hit.normal, Vec3::Z);
    assert_eq!(hit.id, 16);
    assert_eq!(hit.steps, 0);
    assert!((hit.t - 28.0).abs() < 1e-4);
}

#[test]
fn test_start_inside_solid_reports_next_cell() {
    let universe = sphere_universe();
    let chunk = universe.chunk(IVec3::ZERO).unwrap();

    let ray = Ray::new(Vec3::splat(16.5), Vec3::X);
    let hit = traverse(&ray, chunk).unwrap();
    assert_eq!(hit.cell, IVec3::new(17, 16, 16));
    assert_eq!(hit.id, 17);
    assert_eq!(hit.steps, 1);
}

#[test]
fn test_edits_are_visible_to_traversal() {
    let mut universe = Universe::new();
    universe.set_block(IVec3::new(20, 3, 3), Block::from_id(5));
    let chunk = universe.chunk(IVec3::ZERO).unwrap();
    assert!(chunk.dirty_render);

    let ray = Ray::new(Vec3::new(0.5, 3.5, 3.5), Vec3::X);
    let hit = traverse(&ray, chunk).unwrap();
    assert_eq!(hit.cell, IVec3::new(20, 3, 3));
    assert_eq!(hit.id, 5);
    assert!(hit.steps <= MAX_DDA_STEPS);
}

#[test]
fn test_empty_chunk_never_hits() {
    let chunk = Chunk::empty();
    for direction in [Vec3::X, -Vec3::Y, Vec3::new(0.2, 0.9, -0.4), Vec3::ONE] {
        assert!(traverse(&Ray::new(Vec3::splat(10.25), direction), &chunk).is_none());
    }
}
