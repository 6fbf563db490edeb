//! Camera and projection transforms
//!
//! Projections use `Mat4::perspective_rh`, which maps the near plane to
//! depth 0 and the far plane to depth 1.

use glam::Mat4;

/// Inverse of `m`, or `None` when `m` is singular or not finite
pub fn try_inverse(m: &Mat4) -> Option<Mat4> {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let inv = m.inverse();
    inv.is_finite().then_some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_inverse_round_trip() {
        let m = Mat4::from_rotation_translation(
            Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3),
            Vec3::new(3.0, -2.0, 7.0),
        );
        let inv = try_inverse(&m).expect("rigid transform is invertible");
        assert!((m * inv).abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn test_perspective_inverse_is_tight() {
        let view = Mat4::from_rotation_translation(
            Quat::from_rotation_y(0.4) * Quat::from_rotation_x(-0.2),
            Vec3::new(16.0, 16.0, 60.0),
        );
        let clip_from_world = Mat4::perspective_rh(FRAC_PI_2, 1.6, 0.1, 1000.0)
            * try_inverse(&view).unwrap();
        let world_from_clip = try_inverse(&clip_from_world).unwrap();
        assert!((world_from_clip * clip_from_world).abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn test_singular() {
        assert!(try_inverse(&Mat4::ZERO).is_none());
        assert!(try_inverse(&Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0))).is_none());
    }

    #[test]
    fn test_perspective_depth_range() {
        let p = Mat4::perspective_rh(FRAC_PI_2, 1.0, 0.1, 1000.0);
        let near = p.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = p.project_point3(Vec3::new(0.0, 0.0, -1000.0));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_conventions() {
        // x turns y toward z, y turns z toward x
        let y = Mat4::from_rotation_x(FRAC_PI_2).transform_vector3(Vec3::Y);
        assert!(y.abs_diff_eq(Vec3::Z, 1e-6));
        let z = Mat4::from_rotation_y(FRAC_PI_2).transform_vector3(Vec3::Z);
        assert!(z.abs_diff_eq(Vec3::X, 1e-6));
    }
}
