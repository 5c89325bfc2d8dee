use flow_voxel::{
    BlockKind, FillPolicy, Grid, RotationRate,
    config::Config,
    context::Context,
    data_structures::environment::Environment,
    flow::{WorldFlow, run},
};
use instant::Duration;

use crate::common::test_utils::{FailingBackend, RecordingBackend, empty_grid, full_grid};

mod common;

fn five_cube_flow() -> WorldFlow {
    let mut config = Config::default();
    config.world.extent = 5;
    config.world.fill = FillPolicy::AllOfKind {
        kind: BlockKind::Primary,
    };
    WorldFlow::new(Context::new(&config).unwrap())
}

#[test]
fn five_cube_scenario() {
    let mut flow = five_cube_flow();
    assert_eq!(flow.ctx().world().occupied_count(), 125);

    flow.on_update(Duration::from_secs(1));
    let mut backend = RecordingBackend::new();
    flow.on_render(&mut backend).unwrap();

    let frame = backend.last();
    assert_eq!(frame.instances.len(), 98);
    for instance in &frame.instances {
        assert_eq!(instance.rotation, [0.0, 50.0, 0.0].into());
        assert_eq!(instance.kind, Some(BlockKind::Primary));
    }
    assert_eq!(frame.environment, Environment::default());
    assert_eq!(flow.frames(), 1);
}

#[test]
fn elapsed_time_accumulates_across_updates() {
    let mut flow = five_cube_flow();
    let mut backend = RecordingBackend::new();
    for _ in 0..4 {
        flow.on_update(Duration::from_millis(500));
        flow.on_render(&mut backend).unwrap();
    }
    assert_eq!(flow.elapsed(), Duration::from_secs(2));
    let angles: Vec<f32> = backend
        .frames
        .iter()
        .map(|frame| frame.instances[0].rotation.y)
        .collect();
    assert_eq!(angles, vec![25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn long_sessions_keep_frame_resolution() {
    let mut flow = five_cube_flow();
    let mut backend = RecordingBackend::new();
    flow.on_update(Duration::from_secs(200_000));
    flow.on_render(&mut backend).unwrap();
    flow.on_update(Duration::from_millis(16));
    flow.on_render(&mut backend).unwrap();

    let first = backend.frames[0].instances[0].rotation.y;
    let second = backend.frames[1].instances[0].rotation.y;
    // 200_000 s at 50°/s is a whole number of turns plus 280°
    assert!((first - 280.0).abs() < 1e-3, "{first}");
    // one 16 ms frame advances 0.8°
    assert!((second - first - 0.8).abs() < 1e-3, "{first} -> {second}");
}

#[test]
fn rendering_twice_without_update_is_identical() {
    let mut flow = five_cube_flow();
    flow.on_update(Duration::from_millis(1234));
    let mut backend = RecordingBackend::new();
    flow.on_render(&mut backend).unwrap();
    flow.on_render(&mut backend).unwrap();
    assert_eq!(backend.frames[0].instances, backend.frames[1].instances);
}

#[test]
fn empty_world_still_draws_a_frame() {
    let ctx = Context::from_parts(empty_grid(5), Environment::default(), RotationRate::default());
    let mut flow = WorldFlow::new(ctx);
    let mut backend = RecordingBackend::new();
    flow.on_render(&mut backend).unwrap();
    assert_eq!(backend.frames.len(), 1);
    assert!(backend.last().instances.is_empty());
}

#[test]
fn replaced_world_is_seen_by_the_next_frame() {
    let mut flow = five_cube_flow();
    let mut backend = RecordingBackend::new();
    flow.on_render(&mut backend).unwrap();

    let inspector = flow.ctx().world_snapshot();
    let previous = flow.ctx_mut().replace_world(full_grid(3));
    flow.on_render(&mut backend).unwrap();

    assert_eq!(backend.frames[0].instances.len(), 98);
    assert_eq!(backend.frames[1].instances.len(), 26);
    // readers holding the old snapshot are unaffected
    assert_eq!(inspector.extent(), 5);
    assert_eq!(*previous, *inspector);
}

#[test]
fn random_world_tags_instances_with_grid_kinds() {
    let grid = Grid::new(5, &FillPolicy::UniformRandom { seed: Some(5) }).unwrap();
    let ctx = Context::from_parts(grid.clone(), Environment::default(), RotationRate::default());
    let flow = WorldFlow::new(ctx);
    let batch = flow.batch().unwrap();
    assert_eq!(batch.len(), 98);
    for instance in batch {
        assert_eq!(instance.kind, grid.get(instance.coord));
    }
}

#[test]
fn run_drives_the_requested_frames() {
    let mut config = Config::default();
    config.world.fill = FillPolicy::UniformRandom { seed: Some(1) };
    let mut backend = RecordingBackend::new();
    let flow = run(config, &mut backend, 3).unwrap();
    assert_eq!(flow.frames(), 3);
    assert_eq!(backend.frames.len(), 3);
    assert!(backend.frames.iter().all(|frame| frame.instances.len() == 98));
}

#[test]
fn run_rejects_invalid_config() {
    let mut config = Config::default();
    config.world.extent = 0;
    let mut backend = RecordingBackend::new();
    assert!(run(config, &mut backend, 1).is_err());
    assert!(backend.frames.is_empty());
}

#[test]
fn run_stops_on_backend_failure() {
    let mut backend = FailingBackend {
        budget: 2,
        drawn: 0,
    };
    let err = run(Config::default(), &mut backend, 5).unwrap_err();
    assert_eq!(err.to_string(), "device lost");
    assert_eq!(backend.drawn, 2);
}
