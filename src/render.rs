//! The seam between the voxel core and whatever draws it.
//!
//! The core never issues draw calls itself. Each frame it hands a
//! [`DrawBatch`] to a [`RenderBackend`] supplied by the host. Backends built on
//! wgpu can keep the per-instance data in an [`InstanceBuffer`], whose layout
//! is described by [`InstanceRaw::desc`].
//!
//! # Key types
//!
//! - [`RenderBackend`] is the contract a host renderer implements
//! - [`DrawBatch<'a>`] is one frame worth of instances plus the lighting descriptor
//! - [`InstanceBuffer`] owns a GPU vertex buffer of [`InstanceRaw`]
//!

use wgpu::util::DeviceExt;

use crate::data_structures::{
    environment::Environment,
    instance::{InstanceRaw, RenderInstance},
};

/// One frame of draw data.
#[derive(Clone, Copy, Debug)]
pub struct DrawBatch<'a> {
    pub instances: &'a [RenderInstance],
    pub environment: &'a Environment,
}

impl<'a> DrawBatch<'a> {
    pub fn new(instances: &'a [RenderInstance], environment: &'a Environment) -> Self {
        Self {
            instances,
            environment,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn to_raw(&self) -> Vec<InstanceRaw> {
        self.instances.iter().map(RenderInstance::to_raw).collect()
    }
}

/// Implemented by the host renderer.
///
/// `draw` is called exactly once per frame, also when the batch is empty, so a
/// backend can still clear its target. Implementations should not assume
/// anything about the order of instances beyond it being stable for an
/// unchanged world.
pub trait RenderBackend {
    fn draw(&mut self, batch: DrawBatch<'_>) -> anyhow::Result<()>;
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn draw(&mut self, batch: DrawBatch<'_>) -> anyhow::Result<()> {
        (**self).draw(batch)
    }
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn draw(&mut self, batch: DrawBatch<'_>) -> anyhow::Result<()> {
        (**self).draw(batch)
    }
}

/// A GPU vertex buffer holding the raw instances of the latest batch.
///
/// The buffer is rewritten in place each frame and only re-allocated when a
/// batch no longer fits.
pub struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: usize,
}

impl InstanceBuffer {
    const STRIDE: usize = std::mem::size_of::<InstanceRaw>();

    pub fn new(device: &wgpu::Device, batch: &DrawBatch<'_>) -> Self {
        let raw = Self::initial_contents(batch);
        let len = batch.len();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Voxel Instance Buffer"),
            contents: bytemuck::cast_slice(&raw),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            buffer,
            capacity: raw.len(),
            len,
        }
    }

    pub fn write_to_buffer(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        batch: &DrawBatch<'_>,
    ) {
        let raw = batch.to_raw();
        if let Some(capacity) = Self::grown_capacity(self.capacity, raw.len()) {
            log::debug!(
                "growing instance buffer from {} to {} instances",
                self.capacity,
                capacity
            );
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Voxel Instance Buffer"),
                size: (capacity * Self::STRIDE) as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            self.capacity = capacity;
        }
        if !raw.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&raw));
        }
        self.len = raw.len();
    }

    /// Raw instances a new buffer starts with. An empty batch still gets one
    /// zeroed slot since zero-sized vertex buffers cannot be bound.
    pub fn initial_contents(batch: &DrawBatch<'_>) -> Vec<InstanceRaw> {
        let mut raw = batch.to_raw();
        if raw.is_empty() {
            raw.push(bytemuck::Zeroable::zeroed());
        }
        raw
    }

    /// New capacity when `needed` instances no longer fit in `capacity`,
    /// rounded up to a power of two; `None` if the buffer can be reused.
    pub fn grown_capacity(capacity: usize, needed: usize) -> Option<usize> {
        (needed > capacity).then(|| needed.next_power_of_two())
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Instances written by the last update; draw `0..len` of them.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
