use crate::components::entity::Entity;
use crate::renderer::instance::{SphereBuffer, SphereInstance};

/// Build the sphere instance buffer from a set of entities.
/// Inactive entities and entities without a mesh produce no instance.
pub fn build_sphere_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut SphereBuffer) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        buffer.push(SphereInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{Color, MeshComponent};
    use glam::Vec3;

    #[test]
    fn build_buffer_from_entity_with_mesh() {
        let entity = Entity::new(EntityId(1))
            .with_pos(Vec3::new(60.0, 0.0, -25.0))
            .with_mesh(MeshComponent::new(2.1, Color::new(0.2, 0.6, 1.0)).with_emissive(0.5));

        let entities = vec![entity];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.instances()[0];
        assert_eq!(inst.x, 60.0);
        assert_eq!(inst.z, -25.0);
        assert_eq!(inst.radius, 2.1);
        assert_eq!(inst.b, 1.0);
        assert_eq!(inst.emissive, 0.5);
    }

    #[test]
    fn skips_inactive_and_meshless() {
        let bare = Entity::new(EntityId(1));
        let mut hidden = Entity::new(EntityId(2)).with_mesh(MeshComponent::default());
        hidden.active = false;
        let visible = Entity::new(EntityId(3)).with_mesh(MeshComponent::default());

        let entities = vec![bare, hidden, visible];
        let mut buffer = SphereBuffer::new();
        build_sphere_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut buffer = SphereBuffer::new();
        let first = vec![Entity::new(EntityId(1)).with_mesh(MeshComponent::default())];
        build_sphere_buffer(first.iter(), &mut buffer);
        let second: Vec<Entity> = Vec::new();
        build_sphere_buffer(second.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
