//! Turns visible voxels into per-frame render instances.
//!
//! Batching is a pure function of its inputs: the same coordinates, elapsed
//! time and rotation rate always produce the same instances.

use serde::{Deserialize, Serialize};

use crate::{
    data_structures::{block::BlockKind, coord::VoxelCoord, instance::RenderInstance},
    error::{VoxelError, VoxelResult},
};

/// Angular velocity per axis in degrees per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationRate {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Accumulated angle per axis after `elapsed_secs`, wrapped to `[0, 360)`.
    pub fn angles(&self, elapsed_secs: f64) -> cgmath::Vector3<f32> {
        cgmath::Vector3::new(
            wrap_degrees(self.x, elapsed_secs),
            wrap_degrees(self.y, elapsed_secs),
            wrap_degrees(self.z, elapsed_secs),
        )
    }
}

impl Default for RotationRate {
    /// 50°/s about the Y axis.
    fn default() -> Self {
        Self::new(0.0, 50.0, 0.0)
    }
}

/// `rate * elapsed_secs` wrapped to `[0, 360)`, computed in f64.
fn wrap_degrees(rate: f32, elapsed_secs: f64) -> f32 {
    let wrapped = (rate as f64 * elapsed_secs).rem_euclid(360.0) as f32;
    // rem_euclid and the f32 cast can both round up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Anything the batcher can place: a bare coordinate or one tagged with its kind.
pub trait Placement {
    fn coord(&self) -> VoxelCoord;

    fn kind(&self) -> Option<BlockKind> {
        None
    }
}

impl Placement for VoxelCoord {
    fn coord(&self) -> VoxelCoord {
        *self
    }
}

impl Placement for (VoxelCoord, BlockKind) {
    fn coord(&self) -> VoxelCoord {
        self.0
    }

    fn kind(&self) -> Option<BlockKind> {
        Some(self.1)
    }
}

/// Build the render instances for one frame.
///
/// Every instance sits at its voxel coordinate and shares the same rotation,
/// `rate * elapsed_secs` per axis wrapped into `[0, 360)`.
pub fn build_batch<I>(
    visible: I,
    elapsed_secs: f64,
    rate: &RotationRate,
) -> VoxelResult<Vec<RenderInstance>>
where
    I: IntoIterator,
    I::Item: Placement,
{
    if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
        return Err(VoxelError::InvalidInput(format!(
            "elapsed time must be a finite, non-negative number of seconds, got {elapsed_secs}"
        )));
    }
    if !rate.is_finite() {
        return Err(VoxelError::InvalidInput(format!(
            "rotation rate must be finite, got {rate:?}"
        )));
    }

    let rotation = rate.angles(elapsed_secs);
    Ok(visible
        .into_iter()
        .map(|placement| {
            let coord = placement.coord();
            RenderInstance {
                coord,
                position: coord.to_position(),
                rotation,
                kind: placement.kind(),
            }
        })
        .collect())
}
