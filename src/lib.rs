//! flow-voxel
//!
//! A small instancing-oriented voxel core. It owns a dense block grid, culls
//! every block whose six faces are covered, and turns the rest into per-frame
//! render instances for a host-supplied renderer. Window handling, input,
//! cameras and shaders stay with the host.
//!
//! High-level modules
//! - `data_structures`: grid, coordinates, block kinds, instances, lighting
//! - `visibility`: face-occlusion culling over a grid
//! - `batch`: per-frame instance batching with rotation animation
//! - `render`: the backend contract and a wgpu instance buffer
//! - `context`: world snapshot plus environment and animation settings
//! - `flow`: the per-frame driver and a headless `run` loop
//! - `config`: TOML configuration
//! - `error`: the core's error type
//!

pub mod batch;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod render;
pub mod visibility;

// Re-exports commonly used types for convenience in downstream code.
pub use batch::{RotationRate, build_batch};
pub use cgmath;
pub use data_structures::{
    block::BlockKind,
    coord::VoxelCoord,
    grid::{FillPolicy, Grid},
    instance::RenderInstance,
};
pub use error::{VoxelError, VoxelResult};
pub use visibility::compute_visible;
pub use wgpu;
