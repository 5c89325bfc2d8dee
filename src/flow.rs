//! Per-frame driver.
//!
//! A [`WorldFlow`] owns the [`Context`] and the accumulated animation time.
//! Each frame the host calls `on_update` with the time since the last frame
//! and then `on_render` with its backend:
//!
//! 1. visible voxels are collected from the current world snapshot
//! 2. they are batched with the rotation for the total elapsed time
//! 3. the batch and the environment are handed to the backend
//!
//! Nothing here keeps state between frames apart from the elapsed time, so a
//! frame can be re-rendered any number of times with identical output.

use instant::{Duration, Instant};

use crate::{
    batch::build_batch,
    config::Config,
    context::Context,
    data_structures::instance::RenderInstance,
    error::VoxelResult,
    render::{DrawBatch, RenderBackend},
    visibility::compute_visible,
};

#[derive(Debug)]
pub struct WorldFlow {
    ctx: Context,
    elapsed: Duration,
    frames: u64,
}

impl WorldFlow {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    /// Mutable access, e.g. to swap the world or change the rotation rate.
    pub fn ctx_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Total animation time so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn on_update(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    /// The instances for the current elapsed time.
    pub fn batch(&self) -> VoxelResult<Vec<RenderInstance>> {
        let world = self.ctx.world();
        build_batch(
            compute_visible(world).with_kinds(),
            self.elapsed.as_secs_f64(),
            &self.ctx.rotation_rate,
        )
    }

    pub fn on_render<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) -> anyhow::Result<()> {
        let instances = self.batch()?;
        log::debug!(
            "frame {}: {} instances at t={:.3}s",
            self.frames,
            instances.len(),
            self.elapsed.as_secs_f64()
        );
        backend.draw(DrawBatch::new(&instances, &self.ctx.environment))?;
        self.frames += 1;
        Ok(())
    }
}

/// Build a world from `config` and drive `frames` frames into `backend`.
///
/// Frame times are measured with a monotonic clock; pacing is up to the
/// backend (e.g. blocking on vsync inside `draw`).
pub fn run<B: RenderBackend + ?Sized>(
    config: Config,
    backend: &mut B,
    frames: u64,
) -> anyhow::Result<WorldFlow> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let ctx = Context::new(&config)?;
    let mut flow = WorldFlow::new(ctx);

    let mut last_frame = Instant::now();
    for _ in 0..frames {
        let now = Instant::now();
        flow.on_update(now - last_frame);
        last_frame = now;
        if let Err(e) = flow.on_render(backend) {
            log::error!("Unable to render frame {}: {}", flow.frames(), e);
            return Err(e);
        }
    }
    log::info!(
        "rendered {} frames in {:.3}s",
        flow.frames(),
        flow.elapsed().as_secs_f64()
    );
    Ok(flow)
}
