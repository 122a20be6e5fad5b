use crate::api::types::EntityId;
use crate::components::entity::Entity;
use glam::Vec3;

/// A world-space ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// An intersection between a ray and a sphere entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: EntityId,
    /// Distance from the ray origin to the intersection point.
    pub distance: f32,
}

/// Nearest intersection distance between `ray` and a sphere, if any.
/// A ray starting inside the sphere reports the exit point; intersections
/// behind the origin are rejected.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    let t = -b + sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    None
}

/// Cast a ray against sphere entities, returning hits sorted nearest-first.
/// Inactive entities and entities without a mesh are skipped; the nearest
/// hit is the first element of the result.
pub fn pick<'a>(ray: &Ray, entities: impl Iterator<Item = &'a Entity>) -> Vec<Hit> {
    let mut hits: Vec<Hit> = entities
        .filter(|e| e.active)
        .filter_map(|e| {
            let mesh = e.mesh.as_ref()?;
            ray_sphere(ray, e.pos, mesh.radius).map(|distance| Hit { id: e.id, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Color, MeshComponent};

    fn ray_along_neg_z() -> Ray {
        Ray {
            origin: Vec3::new(0.0, 0.0, 100.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    fn sphere_entity(id: u32, pos: Vec3, radius: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::new(radius, Color::default()))
    }

    #[test]
    fn hits_sphere_ahead() {
        let t = ray_sphere(&ray_along_neg_z(), Vec3::ZERO, 10.0).unwrap();
        assert!((t - 90.0).abs() < 1e-4, "t = {t}");
    }

    #[test]
    fn misses_offset_sphere() {
        let t = ray_sphere(&ray_along_neg_z(), Vec3::new(50.0, 0.0, 0.0), 10.0);
        assert!(t.is_none());
    }

    #[test]
    fn rejects_sphere_behind_origin() {
        let t = ray_sphere(&ray_along_neg_z(), Vec3::new(0.0, 0.0, 200.0), 10.0);
        assert!(t.is_none());
    }

    #[test]
    fn ray_inside_sphere_reports_exit() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = ray_sphere(&ray, Vec3::ZERO, 10.0).unwrap();
        assert!((t - 10.0).abs() < 1e-4, "t = {t}");
    }

    #[test]
    fn pick_sorts_nearest_first() {
        let far = sphere_entity(1, Vec3::new(0.0, 0.0, -50.0), 5.0);
        let near = sphere_entity(2, Vec3::new(0.0, 0.0, 20.0), 5.0);
        let entities = vec![far, near];
        let hits = pick(&ray_along_neg_z(), entities.iter());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, EntityId(2));
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn pick_skips_inactive_and_meshless() {
        let mut hidden = sphere_entity(1, Vec3::ZERO, 5.0);
        hidden.active = false;
        let bare = Entity::new(EntityId(2));
        let entities = vec![hidden, bare];
        let hits = pick(&ray_along_neg_z(), entities.iter());
        assert!(hits.is_empty());
    }
}
