//! Startup configuration, loaded once from TOML.
//!
//! Every section falls back to the observed defaults: a 5³ world with a
//! random fill, 50°/s about Y and the dim ambient + white directional light
//! setup from [`Environment::default`].

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    batch::RotationRate,
    data_structures::{environment::Environment, grid::FillPolicy},
    error::{VoxelError, VoxelResult},
};

pub const DEFAULT_EXTENT: i32 = 5;

const SECTIONS: [&str; 3] = ["world", "animation", "environment"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub extent: i32,
    pub fill: FillPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            fill: FillPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub rotation_rate: RotationRate,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub animation: AnimationConfig,
    pub environment: Environment,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        for section in SECTIONS.iter().filter(|section| !table.contains_key(**section)) {
            log::warn!("config has no [{section}] section, using defaults");
        }
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values no world can be built from.
    pub fn validate(&self) -> VoxelResult<()> {
        if self.world.extent <= 0 {
            return Err(VoxelError::InvalidConfig(format!(
                "world.extent must be positive, got {}",
                self.world.extent
            )));
        }
        if !self.animation.rotation_rate.is_finite() {
            return Err(VoxelError::InvalidConfig(format!(
                "animation.rotation_rate must be finite, got {:?}",
                self.animation.rotation_rate
            )));
        }
        Ok(())
    }
}
