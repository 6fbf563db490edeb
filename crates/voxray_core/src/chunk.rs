//! Fixed-size cube of blocks

use voxray_math::{in_cube, IVec3};
use voxray_trace::VoxelGrid;

use crate::Block;

/// Blocks per chunk edge
pub const CHUNK_SIDE: usize = 32;
/// Blocks per chunk layer
pub const CHUNK_AREA: usize = CHUNK_SIDE * CHUNK_SIDE;
/// Blocks per chunk
pub const CHUNK_VOLUME: usize = CHUNK_AREA * CHUNK_SIDE;

/// A `CHUNK_SIDE³` cube of blocks stored flat as `x*N² + y*N + z`.
///
/// The block storage is only mutated through `&mut self`, so a chunk shared
/// with the renderer during a frame is read-only by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    blocks: Box<[Block]>,
    /// Set when block data changed since the renderer last consumed it
    pub dirty_render: bool,
}

impl Default for Chunk {
    fn default() -> Self {
        Self::empty()
    }
}

impl Chunk {
    /// Chunk with every block empty
    pub fn empty() -> Self {
        Self::filled(0)
    }

    /// Chunk with every block set to `id`
    pub fn filled(id: u8) -> Self {
        Self {
            blocks: vec![Block::from_id(id); CHUNK_VOLUME].into_boxed_slice(),
            dirty_render: false,
        }
    }

    /// Every local block position, in storage order
    pub fn positions() -> impl Iterator<Item = IVec3> {
        (0..CHUNK_VOLUME).map(Self::idx2xyz)
    }

    /// True if `xyz` addresses a block inside the chunk
    #[inline]
    pub fn contains(xyz: IVec3) -> bool {
        in_cube(xyz, CHUNK_SIDE as i32)
    }

    /// Flat index of a local position. The position must be in range.
    #[inline]
    pub fn xyz2idx(xyz: IVec3) -> usize {
        xyz.x as usize * CHUNK_AREA + xyz.y as usize * CHUNK_SIDE + xyz.z as usize
    }

    /// Local position of a flat index
    #[inline]
    pub fn idx2xyz(index: usize) -> IVec3 {
        IVec3::new(
            (index / CHUNK_AREA) as i32,
            ((index / CHUNK_SIDE) % CHUNK_SIDE) as i32,
            (index % CHUNK_SIDE) as i32,
        )
    }

    /// Block at a local position, `None` outside the chunk
    pub fn read_block(&self, xyz: IVec3) -> Option<Block> {
        Self::contains(xyz).then(|| self.blocks[Self::xyz2idx(xyz)])
    }

    /// Replace the block at a local position and return the previous one.
    ///
    /// Returns `None` and leaves the chunk untouched outside the chunk.
    pub fn set_block(&mut self, xyz: IVec3, block: Block) -> Option<Block> {
        if !Self::contains(xyz) {
            return None;
        }
        let slot = &mut self.blocks[Self::xyz2idx(xyz)];
        Some(std::mem::replace(slot, block))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Raw block bytes, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    /// Number of non-empty blocks
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_empty()).count()
    }
}

impl VoxelGrid for Chunk {
    fn side(&self) -> i32 {
        CHUNK_SIDE as i32
    }

    fn cell_id(&self, cell: IVec3) -> u32 {
        self.blocks[Self::xyz2idx(cell)].id as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_corners() {
        for xyz in [
            IVec3::ZERO,
            IVec3::new(1, 0, 0),
            IVec3::new(0, 1, 0),
            IVec3::new(0, 0, 1),
            IVec3::splat(31),
            IVec3::new(3, 17, 29),
        ] {
            assert_eq!(Chunk::idx2xyz(Chunk::xyz2idx(xyz)), xyz);
        }
        assert_eq!(Chunk::xyz2idx(IVec3::new(1, 0, 0)), CHUNK_AREA);
        assert_eq!(Chunk::xyz2idx(IVec3::new(0, 1, 0)), CHUNK_SIDE);
        assert_eq!(Chunk::xyz2idx(IVec3::splat(31)), CHUNK_VOLUME - 1);
    }

    #[test]
    fn test_positions_cover_volume_in_order() {
        let positions: Vec<_> = Chunk::positions().collect();
        assert_eq!(positions.len(), CHUNK_VOLUME);
        assert_eq!(positions[0], IVec3::ZERO);
        assert_eq!(positions[1], IVec3::new(0, 0, 1));
        assert_eq!(positions[CHUNK_VOLUME - 1], IVec3::splat(31));
    }

    #[test]
    fn test_set_and_read() {
        let mut chunk = Chunk::empty();
        let previous = chunk.set_block(IVec3::new(4, 5, 6), Block::from_id(9));
        assert_eq!(previous, Some(Block::EMPTY));
        assert_eq!(chunk.read_block(IVec3::new(4, 5, 6)), Some(Block::from_id(9)));
        assert_eq!(chunk.cell_id(IVec3::new(4, 5, 6)), 9);
        assert_eq!(chunk.solid_count(), 1);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut chunk = Chunk::empty();
        assert_eq!(chunk.read_block(IVec3::new(32, 0, 0)), None);
        assert_eq!(chunk.read_block(IVec3::new(0, -1, 0)), None);
        assert_eq!(chunk.set_block(IVec3::new(0, 0, 40), Block::from_id(1)), None);
        assert_eq!(chunk.solid_count(), 0);
    }

    #[test]
    fn test_filled_and_bytes() {
        let chunk = Chunk::filled(3);
        assert_eq!(chunk.solid_count(), CHUNK_VOLUME);
        let bytes = chunk.as_bytes();
        assert_eq!(bytes.len(), CHUNK_VOLUME * 4);
        assert_eq!(&bytes[..4], &[3, 0, 0, 0]);
        assert!(!chunk.dirty_render);
    }
}
