use crate::systems::picking::Ray;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera for 3D rendering.
/// Produces a view-projection matrix mapping world space to clip space
/// (depth in [0, 1], wgpu convention).
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Up direction, normally +Y.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height), fixed at init.
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 60.0,
            aspect: 4.0 / 3.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

impl Camera3D {
    /// Set the aspect ratio from a viewport size. Called once at init;
    /// resize is deliberately not handled afterwards.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Re-aim the camera at a world-space target.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
        }
    }

    /// Project a world-space point to normalized device coordinates.
    /// x and y land in [-1, 1] for points inside the frustum.
    pub fn world_to_ndc(&self, point: Vec3) -> Vec3 {
        self.view_proj().project_point3(point)
    }

    /// World-space ray through a pointer position given in normalized
    /// device coordinates, by unprojecting the near and far planes.
    pub fn ndc_ray(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera3D {
        let mut cam = Camera3D::default();
        cam.position = Vec3::new(0.0, 0.0, 400.0);
        cam.target = Vec3::ZERO;
        cam.fov_y_deg = 75.0;
        cam.z_far = 6000.0;
        cam.set_viewport(800.0, 600.0);
        cam
    }

    #[test]
    fn set_viewport_updates_aspect() {
        let mut cam = Camera3D::default();
        cam.set_viewport(1920.0, 1080.0);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn set_viewport_ignores_degenerate_height() {
        let mut cam = Camera3D::default();
        let before = cam.aspect;
        cam.set_viewport(800.0, 0.0);
        assert_eq!(cam.aspect, before);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = test_camera();
        let ndc = cam.world_to_ndc(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "ndc = {ndc}");
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = test_camera();
        let ray = cam.ndc_ray(Vec2::ZERO);
        let expected = (cam.target - cam.position).normalize();
        assert!((ray.dir - expected).length() < 1e-4, "dir = {}", ray.dir);
    }

    #[test]
    fn ndc_ray_passes_through_projected_point() {
        let cam = test_camera();
        let point = Vec3::new(150.0, 40.0, -80.0);
        let ndc = cam.world_to_ndc(point);
        let ray = cam.ndc_ray(Vec2::new(ndc.x, ndc.y));
        // Distance from the point to the ray should be ~0
        let to_point = point - ray.origin;
        let closest = ray.origin + ray.dir * to_point.dot(ray.dir);
        assert!((closest - point).length() < 0.1, "closest = {closest}");
    }

    #[test]
    fn uniform_is_sixteen_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }
}
