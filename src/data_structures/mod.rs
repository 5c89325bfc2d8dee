//! Engine data structures: the block grid, coordinates, instances and lighting.
//!
//! - `block` holds the block kinds a voxel can contain
//! - `coord` is the integer voxel coordinate used as grid key
//! - `grid` is the dense, immutable block storage and its fill policies
//! - `instance` holds per-instance render data and its GPU layout
//! - `environment` is the lighting descriptor shared by every instance

pub mod block;
pub mod coord;
pub mod environment;
pub mod grid;
pub mod instance;
