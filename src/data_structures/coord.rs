//! Integer voxel coordinates.

use std::fmt;

/// A voxel position on the integer grid.
///
/// Coordinates are signed so that neighbours of boundary voxels (e.g. `x - 1`
/// at `x == 0`) can be expressed and rejected by bounds checks instead of
/// wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The six axis-aligned neighbours in the order -x, +x, -y, +y, -z, +z.
    pub fn neighbours(&self) -> [VoxelCoord; 6] {
        let Self { x, y, z } = *self;
        [
            Self::new(x.wrapping_sub(1), y, z),
            Self::new(x.wrapping_add(1), y, z),
            Self::new(x, y.wrapping_sub(1), z),
            Self::new(x, y.wrapping_add(1), z),
            Self::new(x, y, z.wrapping_sub(1)),
            Self::new(x, y, z.wrapping_add(1)),
        ]
    }

    /// `true` iff every axis lies in `[0, extent)`.
    pub fn within(&self, extent: i32) -> bool {
        let axis = |v: i32| (0..extent).contains(&v);
        axis(self.x) && axis(self.y) && axis(self.z)
    }

    /// World position of the voxel's centre. Voxels are one unit wide.
    pub fn to_position(&self) -> cgmath::Vector3<f32> {
        cgmath::Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
