//! Block (single voxel) type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A single voxel.
///
/// Four bytes, `#[repr(C)]`, so a chunk's blocks can be handed to a GPU
/// buffer or a file unchanged. Only `id` is read by the renderer; an id of
/// zero means the cell is empty.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Block {
    /// Material id, also the atlas cell index
    pub id: u8,
    /// Free-form property bits
    pub properties: u8,
    pub light0: u8,
    pub light1: u8,
}

impl Block {
    /// The empty block
    pub const EMPTY: Self = Self::from_id(0);

    /// Block with the given id and no properties or light
    pub const fn from_id(id: u8) -> Self {
        Self {
            id,
            properties: 0,
            light0: 0,
            light1: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}
