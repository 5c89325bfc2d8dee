//! Error types of the voxel core.
//!
//! Everything in the grid / visibility / batching path fails locally and
//! synchronously, so a single enum covers it. Outer layers (config files,
//! the frame driver, render backends) wrap these in `anyhow` errors.

use thiserror::Error;

use crate::data_structures::coord::VoxelCoord;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoxelError {
    /// Bad initialization parameters, e.g. a non-positive grid extent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A coordinate lookup outside of `[0, extent)` on at least one axis.
    #[error("coordinate {coord} is out of bounds for a grid of extent {extent}")]
    OutOfBounds { coord: VoxelCoord, extent: i32 },

    /// Per-call input that can never be valid, e.g. negative elapsed time.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type VoxelResult<T> = Result<T, VoxelError>;
