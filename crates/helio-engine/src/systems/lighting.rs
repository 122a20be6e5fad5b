use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A 3D point light with position, color, intensity, and falloff range.
/// The scene carries exactly one; the host renderer reads its uniform
/// each frame alongside the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Light strength multiplier.
    pub intensity: f32,
    /// Falloff distance in world units.
    pub range: f32,
}

/// GPU-side light data.
/// Wire format (8 floats / 32 bytes): `[x, y, z, intensity, r, g, b, range]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub range: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
        }
    }

    pub fn uniform(&self) -> LightUniform {
        LightUniform {
            x: self.position.x,
            y: self.position.y,
            z: self.position.z,
            intensity: self.intensity,
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
            range: self.range,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            range: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn uniform_packs_fields() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), [1.0, 0.5, 0.0], 3.5, 2000.0);
        let u = light.uniform();
        assert_eq!(u.x, 1.0);
        assert_eq!(u.z, 3.0);
        assert_eq!(u.intensity, 3.5);
        assert_eq!(u.g, 0.5);
        assert_eq!(u.range, 2000.0);
    }

    #[test]
    fn light_uniform_is_8_floats() {
        assert_eq!(std::mem::size_of::<LightUniform>(), LIGHT_FLOATS * 4);
    }
}
