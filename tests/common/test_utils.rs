#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::bail;
use flow_voxel::{
    BlockKind, FillPolicy, Grid, RenderInstance,
    data_structures::environment::Environment,
    render::{DrawBatch, RenderBackend},
};

/// One `draw` call as seen by a backend.
pub(crate) struct Frame {
    pub instances: Vec<RenderInstance>,
    pub environment: Environment,
}

/// Backend that keeps a copy of every batch it is handed.
#[derive(Default)]
pub(crate) struct RecordingBackend {
    pub frames: Vec<Frame>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &Frame {
        self.frames.last().expect("nothing was drawn")
    }
}

impl RenderBackend for RecordingBackend {
    fn draw(&mut self, batch: DrawBatch<'_>) -> anyhow::Result<()> {
        self.frames.push(Frame {
            instances: batch.instances.to_vec(),
            environment: *batch.environment,
        });
        Ok(())
    }
}

/// Backend that refuses to draw after `budget` frames.
pub(crate) struct FailingBackend {
    pub budget: usize,
    pub drawn: usize,
}

impl RenderBackend for FailingBackend {
    fn draw(&mut self, _: DrawBatch<'_>) -> anyhow::Result<()> {
        if self.drawn >= self.budget {
            bail!("device lost");
        }
        self.drawn += 1;
        Ok(())
    }
}

pub(crate) fn full_grid(extent: i32) -> Grid {
    Grid::new(
        extent,
        &FillPolicy::AllOfKind {
            kind: BlockKind::Primary,
        },
    )
    .expect("valid extent")
}

pub(crate) fn empty_grid(extent: i32) -> Grid {
    Grid::new(extent, &FillPolicy::Empty).expect("valid extent")
}

/// Number of voxels touching the outside of a full `extent³` cube.
pub(crate) fn surface_count(extent: i32) -> usize {
    let n = extent as usize;
    let inner = n.saturating_sub(2);
    n * n * n - inner * inner * inner
}

pub(crate) fn on_boundary(extent: i32, x: i32, y: i32, z: i32) -> bool {
    [x, y, z].iter().any(|v| *v == 0 || *v == extent - 1)
}

/// Logger that keeps every record so tests can look for a message.
pub(crate) struct CapturedLogs {
    records: Mutex<Vec<(log::Level, String)>>,
}

static LOGS: CapturedLogs = CapturedLogs {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger for this test binary. Safe to call from
/// every test; only the first call installs it.
pub(crate) fn capture_logs() -> &'static CapturedLogs {
    if log::set_logger(&LOGS).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
    &LOGS
}

impl CapturedLogs {
    pub fn contains(&self, level: log::Level, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl log::Log for CapturedLogs {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
