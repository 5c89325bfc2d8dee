//! Dense block storage for a cubic region of the world.
//!
//! The grid holds exactly `extent³` block kinds laid out in lexicographic
//! `(x, y, z)` order, so a lookup is a bounds check plus one multiply-add and
//! iterating the storage visits coordinates in a stable order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    data_structures::{block::BlockKind, coord::VoxelCoord},
    error::{VoxelError, VoxelResult},
};

/// How a freshly created grid is populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FillPolicy {
    /// Every voxel independently becomes `Primary` or `Secondary` with equal
    /// probability. Without a seed one is taken from the system clock; the
    /// seed actually used is available through [`Grid::seed`].
    UniformRandom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// Every voxel holds `kind`.
    AllOfKind { kind: BlockKind },
    /// Every voxel is empty.
    Empty,
}

impl Default for FillPolicy {
    fn default() -> Self {
        FillPolicy::UniformRandom { seed: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    extent: i32,
    blocks: Vec<BlockKind>,
    seed: Option<u64>,
}

impl Grid {
    /// Build a dense `extent³` grid filled according to `fill`.
    pub fn new(extent: i32, fill: &FillPolicy) -> VoxelResult<Self> {
        let len = volume(extent)?;
        let mut blocks = storage(extent, len)?;
        let seed = match fill {
            FillPolicy::UniformRandom { seed } => {
                let seed = seed.unwrap_or_else(clock_seed);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                blocks.extend(
                    (0..len).map(|_| BlockKind::SOLID[rng.gen_range(0..BlockKind::SOLID.len())]),
                );
                Some(seed)
            }
            FillPolicy::AllOfKind { kind } => {
                blocks.resize(len, *kind);
                None
            }
            FillPolicy::Empty => {
                blocks.resize(len, BlockKind::Empty);
                None
            }
        };

        Ok(Self {
            extent,
            blocks,
            seed,
        })
    }

    /// Build a grid whose kind at each coordinate is `f(coord)`.
    pub fn from_fn(extent: i32, mut f: impl FnMut(VoxelCoord) -> BlockKind) -> VoxelResult<Self> {
        let len = volume(extent)?;
        let mut grid = Self {
            extent,
            blocks: storage(extent, len)?,
            seed: None,
        };
        for idx in 0..len {
            let kind = f(grid.coord_of(idx));
            grid.blocks.push(kind);
        }
        Ok(grid)
    }

    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Number of voxels, always `extent³`.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Seed used by a random fill, `None` for deterministic policies.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn contains(&self, coord: VoxelCoord) -> bool {
        coord.within(self.extent)
    }

    /// Block kind at `coord`.
    pub fn kind_at(&self, coord: VoxelCoord) -> VoxelResult<BlockKind> {
        self.get(coord).ok_or(VoxelError::OutOfBounds {
            coord,
            extent: self.extent,
        })
    }

    pub fn is_occupied(&self, coord: VoxelCoord) -> VoxelResult<bool> {
        self.kind_at(coord).map(BlockKind::is_occupied)
    }

    /// Non-failing lookup: `None` outside the grid.
    pub fn get(&self, coord: VoxelCoord) -> Option<BlockKind> {
        self.index_of(coord).map(|idx| self.blocks[idx])
    }

    pub fn occupied_count(&self) -> usize {
        self.blocks.iter().filter(|kind| kind.is_occupied()).count()
    }

    /// All voxels with their kinds in lexicographic `(x, y, z)` order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoord, BlockKind)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(idx, kind)| (self.coord_of(idx), *kind))
    }

    pub(crate) fn index_of(&self, coord: VoxelCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let n = self.extent as usize;
        Some((coord.x as usize * n + coord.y as usize) * n + coord.z as usize)
    }

    pub(crate) fn coord_of(&self, idx: usize) -> VoxelCoord {
        let n = self.extent as usize;
        VoxelCoord::new(
            (idx / (n * n)) as i32,
            ((idx / n) % n) as i32,
            (idx % n) as i32,
        )
    }

    pub(crate) fn kind_at_index(&self, idx: usize) -> Option<BlockKind> {
        self.blocks.get(idx).copied()
    }
}

fn volume(extent: i32) -> VoxelResult<usize> {
    if extent <= 0 {
        return Err(VoxelError::InvalidConfig(format!(
            "grid extent must be positive, got {extent}"
        )));
    }
    let n = extent as usize;
    n.checked_mul(n)
        .and_then(|square| square.checked_mul(n))
        .ok_or_else(|| VoxelError::InvalidConfig(format!("grid extent {extent} is too large")))
}

/// Reserve room for `len` blocks up front so an extent the allocator cannot
/// satisfy is reported instead of aborting the process.
fn storage(extent: i32, len: usize) -> VoxelResult<Vec<BlockKind>> {
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(len).map_err(|err| {
        VoxelError::InvalidConfig(format!(
            "grid extent {extent} needs {len} blocks, which cannot be allocated: {err}"
        ))
    })?;
    Ok(blocks)
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|since| since.as_nanos() as u64)
        .unwrap_or_default()
}
