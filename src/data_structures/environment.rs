//! Shared lighting descriptor handed to the render backend with every batch.

use serde::{Deserialize, Serialize};

use crate::data_structures::block::BlockKind;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLight {
    pub colour: [f32; 3],
    /// Direction the light travels in, not necessarily normalized.
    pub direction: [f32; 3],
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            colour: [1.0, 1.0, 1.0],
            direction: [-1.0, -0.8, -0.2],
        }
    }
}

/// Base colour per occupied block kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: [f32; 4],
    pub secondary: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: [0.0, 1.0, 0.0, 1.0],
            secondary: [0.5, 0.5, 0.5, 1.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub clear_colour: [f32; 4],
    pub ambient: [f32; 4],
    pub directional: DirectionalLight,
    pub palette: Palette,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            clear_colour: [0.1, 0.1, 0.1, 1.0],
            ambient: [0.8, 0.8, 0.8, 1.0],
            directional: DirectionalLight::default(),
            palette: Palette::default(),
        }
    }
}

impl Environment {
    /// Diffuse colour for `kind`; empty blocks have none.
    pub fn diffuse(&self, kind: BlockKind) -> Option<[f32; 4]> {
        match kind {
            BlockKind::Empty => None,
            BlockKind::Primary => Some(self.palette.primary),
            BlockKind::Secondary => Some(self.palette.secondary),
        }
    }

    pub fn to_uniform(&self) -> EnvironmentUniform {
        EnvironmentUniform {
            ambient: self.ambient,
            light_direction: self.directional.direction,
            _padding: 0,
            light_colour: self.directional.colour,
            _padding2: 0,
            primary: self.palette.primary,
            secondary: self.palette.secondary,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EnvironmentUniform {
    ambient: [f32; 4],
    light_direction: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding: u32,
    light_colour: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding2: u32,
    primary: [f32; 4],
    secondary: [f32; 4],
}
