/// RGB color in linear [0, 1] components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Component for sphere-rendered bodies.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    /// Sphere radius in world units.
    pub radius: f32,
    pub color: Color,
    /// Self-illumination: 0.0 means fully lit by the scene light,
    /// values above push the body toward an unlit glow.
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: Color::default(),
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn new(radius: f32, color: Color) -> Self {
        Self {
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
