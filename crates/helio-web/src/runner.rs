use helio_engine::{
    build_sphere_buffer, CameraUniform, EngineContext, FrameClock, Game, GameConfig, InputEvent,
    InputQueue, LightUniform, ProtocolLayout, SceneCatalog, SphereBuffer, Starfield, UiEvent,
};

/// Generic application runner that wires up the engine loop.
///
/// Each concrete application creates a `thread_local!` AppRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. The runner itself has no DOM dependency, so a
/// fixed number of ticks can be driven headlessly in tests.
pub struct AppRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    spheres: SphereBuffer,
    starfield: Starfield,
    camera_uniform: CameraUniform,
    light_uniform: LightUniform,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> AppRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let spheres = SphereBuffer::with_capacity(config.max_spheres);
        let starfield = Starfield::generate(config.star_count, config.star_extent, config.star_seed);
        let ctx = EngineContext::new();
        let camera_uniform = ctx.camera.uniform();
        let light_uniform = ctx.light.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            spheres,
            starfield,
            camera_uniform,
            light_uniform,
            clock: FrameClock::new(),
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the application. Call once after construction.
    /// The viewport size fixes the camera aspect ratio for the whole
    /// session; later window resizes are deliberately ignored.
    pub fn init(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width > 0.0 && viewport_height > 0.0 {
            self.config.viewport_width = viewport_width;
            self.config.viewport_height = viewport_height;
        }
        self.ctx
            .camera
            .set_viewport(self.config.viewport_width, self.config.viewport_height);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update the simulation, then publish the
    /// sphere, camera, and light sections for the host renderer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // One simulation step per display refresh
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        // Publish render sections
        build_sphere_buffer(self.ctx.scene.iter(), &mut self.spheres);
        self.camera_uniform = self.ctx.camera.uniform();
        self.light_uniform = self.ctx.light.uniform();

        self.clock.advance(dt);
    }

    /// Apply a JSON scene catalog. A malformed catalog is logged and
    /// ignored; the running scene is left untouched.
    pub fn load_catalog(&mut self, json: &str) {
        match SceneCatalog::from_json(json) {
            Ok(catalog) => self.game.apply_catalog(&mut self.ctx, &catalog),
            Err(err) => log::warn!("scene catalog rejected: {err}"),
        }
    }

    /// UI events emitted by the most recent tick.
    pub fn events(&self) -> &[UiEvent] {
        &self.ctx.events
    }

    // ---- Pointer accessors for host-side reads from WASM memory ----

    pub fn sphere_instances_ptr(&self) -> *const f32 {
        self.spheres.instances_ptr()
    }

    pub fn sphere_instance_count(&self) -> u32 {
        self.spheres.instance_count()
    }

    pub fn star_positions_ptr(&self) -> *const f32 {
        self.starfield.positions_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.starfield.star_count()
    }

    pub fn camera_uniform_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn light_uniform_ptr(&self) -> *const f32 {
        &self.light_uniform as *const LightUniform as *const f32
    }

    pub fn ui_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn ui_event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn frame_counter(&self) -> u32 {
        self.clock.frame() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.config.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    // ---- Capacity accessors (read by the host to size its copy buffer) ----

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use helio_engine::{Color, Entity, EntityId, MeshComponent};

    /// Minimal game: one sphere that slides +1 on x every tick.
    struct Slider {
        id: Option<EntityId>,
    }

    impl Slider {
        fn new() -> Self {
            Self { id: None }
        }
    }

    impl Game for Slider {
        fn config(&self) -> GameConfig {
            GameConfig {
                star_count: 10,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene
                .spawn(Entity::new(id).with_mesh(MeshComponent::new(1.0, Color::default())));
            self.id = Some(id);
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            if let Some(e) = self.id.and_then(|id| ctx.scene.get_mut(id)) {
                e.pos += Vec3::X;
            }
            ctx.emit_event(UiEvent { kind: 1.0, a: 0.0, b: 0.0, c: 0.0 });
        }
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = AppRunner::new(Slider::new());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.frame_counter(), 0);
        assert_eq!(runner.sphere_instance_count(), 0);
    }

    #[test]
    fn tick_publishes_spheres_and_counts_frames() {
        let mut runner = AppRunner::new(Slider::new());
        runner.init(800.0, 600.0);
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.frame_counter(), 2);
        assert_eq!(runner.sphere_instance_count(), 1);
    }

    #[test]
    fn events_reflect_only_the_last_tick() {
        let mut runner = AppRunner::new(Slider::new());
        runner.init(800.0, 600.0);
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.events().len(), 1);
    }

    #[test]
    fn starfield_generated_from_config() {
        let runner = AppRunner::new(Slider::new());
        assert_eq!(runner.star_count(), 10);
    }

    #[test]
    fn bad_catalog_is_ignored() {
        let mut runner = AppRunner::new(Slider::new());
        runner.init(800.0, 600.0);
        runner.load_catalog("not json");
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.sphere_instance_count(), 1);
    }
}
