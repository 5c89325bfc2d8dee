use flow_voxel::{
    BlockKind,
    config::Config,
    render::{DrawBatch, RenderBackend},
};

/// Stands in for a real renderer: counts what would be drawn.
#[derive(Default)]
struct LogBackend {
    frames: u64,
    instances: usize,
}

impl RenderBackend for LogBackend {
    fn draw(&mut self, batch: DrawBatch<'_>) -> anyhow::Result<()> {
        let primary = batch
            .instances
            .iter()
            .filter(|instance| instance.kind == Some(BlockKind::Primary))
            .count();
        let spin = batch
            .instances
            .first()
            .map(|instance| instance.rotation.y)
            .unwrap_or_default();
        log::info!(
            "frame {}: {} cubes ({} primary), y rotation {:.1}°",
            self.frames,
            batch.len(),
            primary,
            spin
        );
        self.frames += 1;
        self.instances += batch.len();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let frames = match args.next() {
        Some(frames) => frames.parse()?,
        None => 60,
    };

    let mut backend = LogBackend::default();
    let flow = flow_voxel::flow::run(config, &mut backend, frames)?;
    println!(
        "{} frames, {} instances drawn, {} of {} voxels visible",
        backend.frames,
        backend.instances,
        flow_voxel::compute_visible(flow.ctx().world()).count(),
        flow.ctx().world().len()
    );
    Ok(())
}
