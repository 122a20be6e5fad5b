pub mod api;
pub mod bridge;
pub mod components;
pub mod config;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, UiEvent};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent};
pub use config::catalog::{PlanetDescriptor, SceneCatalog};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{SphereBuffer, SphereInstance};
pub use systems::lighting::{LightUniform, PointLight};
pub use systems::picking::{self, Hit, Ray};
pub use systems::render::build_sphere_buffer;
pub use systems::starfield::Starfield;
