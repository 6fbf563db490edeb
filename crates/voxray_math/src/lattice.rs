//! Integer lattice helpers
//!
//! Cells are unit cubes: cell `c` covers `[c, c + 1)` on every axis.

use glam::{IVec3, Vec3};

/// Cell containing a world point (component-wise floor)
#[inline]
pub fn cell_of(p: Vec3) -> IVec3 {
    p.floor().as_ivec3()
}

/// True when every component of `cell` lies in `0..side`
#[inline]
pub fn in_cube(cell: IVec3, side: i32) -> bool {
    cell.cmpge(IVec3::ZERO).all() && cell.cmplt(IVec3::splat(side)).all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_of_negative() {
        assert_eq!(cell_of(Vec3::new(-0.1, 0.9, 31.999)), IVec3::new(-1, 0, 31));
    }

    #[test]
    fn test_euclid_split() {
        let side = IVec3::splat(32);
        let p = IVec3::new(-1, 33, 0);
        assert_eq!(p.div_euclid(side), IVec3::new(-1, 1, 0));
        assert_eq!(p.rem_euclid(side), IVec3::new(31, 1, 0));
    }

    #[test]
    fn test_in_cube() {
        assert!(in_cube(IVec3::new(0, 31, 5), 32));
        assert!(!in_cube(IVec3::new(32, 0, 0), 32));
        assert!(!in_cube(IVec3::new(0, -1, 0), 32));
    }
}
