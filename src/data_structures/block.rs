use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};

/**
 * The content of a single voxel.
 *
 * `Empty` marks an absent block; every other kind occupies its voxel. The
 * kinds carry no behaviour of their own: a backend may use them to pick a
 * material, nothing in the core treats `Primary` and `Secondary` differently.
 */
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Empty = 0,
    Primary = 1,
    Secondary = 2,
}

impl BlockKind {
    /// Kinds a random fill picks from.
    pub const SOLID: [BlockKind; 2] = [BlockKind::Primary, BlockKind::Secondary];

    pub fn is_occupied(self) -> bool {
        self != BlockKind::Empty
    }
}

impl TryFrom<u8> for BlockKind {
    type Error = VoxelError;

    fn try_from(value: u8) -> VoxelResult<Self> {
        match value {
            0 => Ok(BlockKind::Empty),
            1 => Ok(BlockKind::Primary),
            2 => Ok(BlockKind::Secondary),
            other => Err(VoxelError::InvalidInput(format!(
                "unknown block kind {other}"
            ))),
        }
    }
}

impl From<BlockKind> for u8 {
    fn from(kind: BlockKind) -> Self {
        kind as u8
    }
}

impl From<BlockKind> for u32 {
    fn from(kind: BlockKind) -> Self {
        kind as u32
    }
}
