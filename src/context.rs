use std::sync::Arc;

use crate::{
    batch::RotationRate,
    config::Config,
    data_structures::{environment::Environment, grid::Grid},
    error::VoxelResult,
    visibility::compute_visible,
};

/// Everything a frame needs: the world snapshot, the lighting descriptor and
/// the animation rate.
///
/// The grid is immutable and shared behind an `Arc`, so inspectors can hold
/// on to a snapshot while the next frame already sees a replacement world.
#[derive(Debug, Clone)]
pub struct Context {
    world: Arc<Grid>,
    pub environment: Environment,
    pub rotation_rate: RotationRate,
}

impl Context {
    pub fn new(config: &Config) -> VoxelResult<Self> {
        config.validate()?;
        let world = Grid::new(config.world.extent, &config.world.fill)?;
        log::info!(
            "world created: extent {}, fill {:?}, {} of {} voxels occupied",
            world.extent(),
            config.world.fill,
            world.occupied_count(),
            world.len(),
        );
        if let Some(seed) = world.seed() {
            log::info!("random fill seed {seed}");
        }
        log::debug!("{} voxels visible", compute_visible(&world).count());

        Ok(Self {
            world: Arc::new(world),
            environment: config.environment,
            rotation_rate: config.animation.rotation_rate,
        })
    }

    pub fn from_parts(world: Grid, environment: Environment, rotation_rate: RotationRate) -> Self {
        Self {
            world: Arc::new(world),
            environment,
            rotation_rate,
        }
    }

    pub fn world(&self) -> &Grid {
        &self.world
    }

    /// Shared handle to the current world snapshot.
    pub fn world_snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.world)
    }

    /// Swap in a new world; returns the previous snapshot.
    pub fn replace_world(&mut self, world: Grid) -> Arc<Grid> {
        log::info!(
            "replacing world: extent {} -> {}",
            self.world.extent(),
            world.extent()
        );
        std::mem::replace(&mut self.world, Arc::new(world))
    }
}
