//! Instance transformation data for GPU rendering.
//!
//! A [`RenderInstance`] is what the batcher hands out each frame: a voxel
//! position plus per-axis rotation in degrees. Backends that draw with GPU
//! instancing turn it into an [`Instance`] transform and finally into the
//! packed [`InstanceRaw`] that lives in the instance buffer.

use cgmath::{Rotation3, SquareMatrix};

use crate::data_structures::{block::BlockKind, coord::VoxelCoord};

/// Per-frame draw data for one visible voxel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderInstance {
    pub coord: VoxelCoord,
    /// World position, equal to the voxel coordinate (voxel size is one unit).
    pub position: cgmath::Vector3<f32>,
    /// Rotation about x, y and z in degrees, each in `[0, 360)`.
    pub rotation: cgmath::Vector3<f32>,
    /// Block kind for material selection when the producer knew it.
    pub kind: Option<BlockKind>,
}

impl RenderInstance {
    /// Rotation applied about X first, then Y, then Z.
    pub fn rotation_quaternion(&self) -> cgmath::Quaternion<f32> {
        cgmath::Quaternion::from_angle_x(cgmath::Deg(self.rotation.x))
            * cgmath::Quaternion::from_angle_y(cgmath::Deg(self.rotation.y))
            * cgmath::Quaternion::from_angle_z(cgmath::Deg(self.rotation.z))
    }

    pub fn to_instance(&self) -> Instance {
        Instance {
            position: self.position,
            rotation: self.rotation_quaternion(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let mut raw = self.to_instance().to_raw();
        raw.kind = self.kind.map(u32::from).unwrap_or_default();
        raw
    }
}

/// Per-instance transformation: position, rotation (as quaternion), and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Instance {
    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let world_matrix = self.to_matrix();
        let handedness = world_matrix.determinant().signum();
        InstanceRaw {
            model: world_matrix.into(),
            normal: cgmath::Matrix3::from(self.rotation).into(),
            handedness,
            kind: 0,
        }
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
    handedness: f32,
    kind: u32,
}

impl InstanceRaw {
    pub fn model(&self) -> [[f32; 4]; 4] {
        self.model
    }

    pub fn normal(&self) -> [[f32; 3]; 3] {
        self.normal
    }

    pub fn handedness(&self) -> f32 {
        self.handedness
    }

    /// Block kind as its numeric value, `0` when unknown.
    pub fn kind(&self) -> u32 {
        self.kind
    }

    /**
     * As we store instance data directly in the GPU memory we need to tell what the bytes refer to:
     *
     * Stride layout here: model matrix as four vec4, normal matrix as three vec3,
     * handedness and finally the block kind.
     */
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // Shaders only advance to the next element when a new instance starts
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // A mat4 takes up 4 vertex slots as it is technically 4 vec4s.
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 25]>() as wgpu::BufferAddress,
                    shader_location: 12,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 26]>() as wgpu::BufferAddress,
                    shader_location: 13,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        }
    }
}
