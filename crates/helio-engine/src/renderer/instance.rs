use bytemuck::{Pod, Zeroable};

/// Per-body render data read by the host renderer each frame.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// Position in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Linear RGB color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Self-illumination (0.0 = lit by the scene light).
    pub emissive: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of sphere instances published to the host renderer.
pub struct SphereBuffer {
    instances: Vec<SphereInstance>,
}

impl SphereBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    /// Create a buffer with a specific instance capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances(&self) -> &[SphereInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for host-side reads from WASM memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for SphereBuffer {
    fn default() -> Self {
        Self::new()
    }
}
