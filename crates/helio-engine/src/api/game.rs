use crate::api::types::{EntityId, UiEvent};
use crate::config::catalog::SceneCatalog;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::PointLight;

/// Configuration for the engine, provided by the application.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Viewport width in CSS pixels at load time (default: 800).
    pub viewport_width: f32,
    /// Viewport height in CSS pixels at load time (default: 600).
    pub viewport_height: f32,
    /// Maximum number of sphere instances (default: 64).
    pub max_spheres: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_events: usize,
    /// Number of background stars to scatter at init (default: 0).
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    pub star_extent: f32,
    /// Seed for the starfield scatter.
    pub star_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_spheres: 64,
            max_events: 32,
            star_count: 0,
            star_extent: 1000.0,
            star_seed: 1,
        }
    }
}

/// The core contract every application must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up the scene: spawn entities, aim the camera, place the light.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation tick: drain input, advance state, emit UI events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Apply a runtime scene catalog override. Default: ignore it.
    fn apply_catalog(&mut self, _ctx: &mut EngineContext, _catalog: &SceneCatalog) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub light: PointLight,
    pub events: Vec<UiEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::default(),
            light: PointLight::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to the page layer.
    pub fn emit_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
