//! Face-occlusion culling.
//!
//! A block only needs to be drawn if at least one of its six faces can be
//! seen, i.e. the neighbour across that face is empty or outside the grid.
//! Blocks buried on all six sides never reach the batcher.

use crate::data_structures::{block::BlockKind, coord::VoxelCoord, grid::Grid};

/// `true` iff `coord` is occupied and has at least one exposed face.
///
/// Coordinates outside the grid are never visible.
pub fn is_visible(grid: &Grid, coord: VoxelCoord) -> bool {
    match grid.get(coord) {
        Some(kind) if kind.is_occupied() => coord
            .neighbours()
            .iter()
            .any(|neighbour| !grid.get(*neighbour).is_some_and(BlockKind::is_occupied)),
        _ => false,
    }
}

/// Lazily yields every visible voxel of `grid` in lexicographic order.
///
/// The returned iterator borrows the grid; calling this again (or cloning the
/// iterator) restarts the walk from the first voxel.
pub fn compute_visible(grid: &Grid) -> Visible<'_> {
    Visible { grid, next: 0 }
}

#[derive(Clone, Debug)]
pub struct Visible<'a> {
    grid: &'a Grid,
    next: usize,
}

impl<'a> Visible<'a> {
    /// Pair every visible coordinate with its block kind.
    pub fn with_kinds(self) -> impl Iterator<Item = (VoxelCoord, BlockKind)> + 'a {
        let grid = self.grid;
        self.filter_map(move |coord| grid.get(coord).map(|kind| (coord, kind)))
    }
}

impl Iterator for Visible<'_> {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.grid.len() {
            let idx = self.next;
            self.next += 1;
            let occupied = self
                .grid
                .kind_at_index(idx)
                .is_some_and(BlockKind::is_occupied);
            if !occupied {
                continue;
            }
            let coord = self.grid.coord_of(idx);
            if is_visible(self.grid, coord) {
                return Some(coord);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.grid.len().saturating_sub(self.next)))
    }
}

impl std::iter::FusedIterator for Visible<'_> {}
