//! The solar-system simulation: 8 planets on circular orbits around an
//! emissive sun, with hover picking and click-to-focus.
//!
//! All mutable state (angles, speeds, flags, pointer) lives on the
//! `Orrery` struct; the control panel reaches it only through queued
//! input events, and reads it back only through emitted UI events.

use glam::{Vec2, Vec3};
use helio_engine::{
    picking, Color, EngineContext, Entity, EntityId, Game, GameConfig, InputEvent, InputQueue,
    MeshComponent, PointLight, SceneCatalog, UiEvent,
};

use crate::{bodies, orbit};

// ── Custom input kinds from the control panel ────────────────────────

/// a = planet index, b = new angular speed.
pub const CUSTOM_SET_SPEED: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_TOGGLE_THEME: u32 = 3;

// ── UI event kinds to the control panel ──────────────────────────────

/// a = hovered planet index, or NO_HOVER on a miss. Emitted every tick.
pub const EVENT_HOVER: f32 = 1.0;
/// a = 1 paused, 0 running. Emitted on toggle.
pub const EVENT_PAUSE: f32 = 2.0;
/// a = 1 dark, 0 light. Emitted on toggle.
pub const EVENT_THEME: f32 = 3.0;

pub const NO_HOVER: f32 = -1.0;

pub struct Orrery {
    /// Accumulated orbit angle per planet, in radians.
    angles: [f32; bodies::PLANET_COUNT],
    /// Angle advance per tick, per planet.
    speeds: [f32; bodies::PLANET_COUNT],
    /// Orbit radii; constant unless a catalog overrides them.
    orbit_radii: [f32; bodies::PLANET_COUNT],
    paused: bool,
    dark_mode: bool,
    /// Last pointer position in normalized device coordinates.
    pointer: Vec2,
    planet_ids: [Option<EntityId>; bodies::PLANET_COUNT],
}

impl Orrery {
    pub fn new() -> Self {
        let mut speeds = [0.0; bodies::PLANET_COUNT];
        for (i, speed) in speeds.iter_mut().enumerate() {
            *speed = bodies::initial_speed(i);
        }
        Self {
            angles: [0.0; bodies::PLANET_COUNT],
            speeds,
            orbit_radii: bodies::ORBIT_RADII,
            paused: false,
            dark_mode: true,
            pointer: Vec2::ZERO,
            planet_ids: [None; bodies::PLANET_COUNT],
        }
    }

    /// Ray-cast the current pointer against the planets (sun excluded).
    /// Returns the nearest hit as (planet index, world position).
    fn pick_planet(&self, ctx: &EngineContext) -> Option<(usize, Vec3)> {
        let ray = ctx.camera.ndc_ray(self.pointer);
        let planets = self
            .planet_ids
            .iter()
            .filter_map(|id| ctx.scene.get((*id)?));
        let hits = picking::pick(&ray, planets);
        let nearest = hits.first()?;
        let index = self
            .planet_ids
            .iter()
            .position(|id| *id == Some(nearest.id))?;
        Some((index, ctx.scene.get(nearest.id)?.pos))
    }

    /// Click handler: jump the camera toward the picked planet.
    fn focus_on_pick(&mut self, ctx: &mut EngineContext) {
        let Some((_, target)) = self.pick_planet(ctx) else {
            return;
        };
        ctx.camera.position = target * bodies::FOCUS_DISTANCE_SCALE
            + Vec3::new(0.0, 0.0, bodies::FOCUS_DEPTH_OFFSET);
        ctx.camera.look_at(target);
    }

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => {
                let index = a as usize;
                if index < bodies::PLANET_COUNT {
                    self.speeds[index] = b;
                }
            }
            CUSTOM_TOGGLE_PAUSE => {
                self.paused = !self.paused;
                ctx.emit_event(UiEvent {
                    kind: EVENT_PAUSE,
                    a: self.paused as u32 as f32,
                    b: 0.0,
                    c: 0.0,
                });
            }
            CUSTOM_TOGGLE_THEME => {
                self.dark_mode = !self.dark_mode;
                ctx.emit_event(UiEvent {
                    kind: EVENT_THEME,
                    a: self.dark_mode as u32 as f32,
                    b: 0.0,
                    c: 0.0,
                });
            }
            _ => {}
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_spheres: 16,
            max_events: 32,
            star_count: bodies::STAR_COUNT,
            star_extent: bodies::STAR_EXTENT,
            star_seed: bodies::STAR_SEED,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Sun: emissive, so the scene light does not shade it ──────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("Sun")
                .with_mesh(
                    MeshComponent::new(bodies::SUN_RADIUS, Color::from_hex(bodies::SUN_COLOR))
                        .with_emissive(1.0),
                ),
        );

        // ── Light at the origin ──────────────────────────────────────
        ctx.light = PointLight::new(
            Vec3::ZERO,
            bodies::LIGHT_COLOR,
            bodies::LIGHT_INTENSITY,
            bodies::LIGHT_RANGE,
        );

        // ── Camera: aspect was fixed from the load-time viewport ─────
        ctx.camera.fov_y_deg = bodies::CAMERA_FOV_DEG;
        ctx.camera.z_near = bodies::CAMERA_NEAR;
        ctx.camera.z_far = bodies::CAMERA_FAR;
        ctx.camera.position = Vec3::new(0.0, 0.0, bodies::CAMERA_START_Z);
        ctx.camera.look_at(Vec3::ZERO);

        // ── Planets ──────────────────────────────────────────────────
        for i in 0..bodies::PLANET_COUNT {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(bodies::PLANET_NAMES[i])
                    .with_pos(orbit::position(self.orbit_radii[i], self.angles[i]))
                    .with_mesh(MeshComponent::new(
                        bodies::PLANET_RADII[i],
                        Color::from_hex(bodies::PLANET_COLORS[i]),
                    )),
            );
            self.planet_ids[i] = Some(id);
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => self.pointer = Vec2::new(x, y),
                InputEvent::Click { x, y } => {
                    self.pointer = Vec2::new(x, y);
                    self.focus_on_pick(ctx);
                }
                InputEvent::Custom { kind, a, b, .. } => self.handle_custom(ctx, kind, a, b),
            }
        }

        // ── Advance orbits ───────────────────────────────────────────
        // While paused, angles and positions are left exactly as they
        // were; speed edits made during a pause apply once unpaused.
        if !self.paused {
            for i in 0..bodies::PLANET_COUNT {
                self.angles[i] = orbit::advance(self.angles[i], self.speeds[i]);
                if let Some(e) = self.planet_ids[i].and_then(|id| ctx.scene.get_mut(id)) {
                    e.pos = orbit::position(self.orbit_radii[i], self.angles[i]);
                }
            }
        }

        // ── Hover pick, every tick ───────────────────────────────────
        let hovered = self
            .pick_planet(ctx)
            .map(|(index, _)| index as f32)
            .unwrap_or(NO_HOVER);
        ctx.emit_event(UiEvent {
            kind: EVENT_HOVER,
            a: hovered,
            b: 0.0,
            c: 0.0,
        });
    }

    fn apply_catalog(&mut self, ctx: &mut EngineContext, catalog: &SceneCatalog) {
        for desc in &catalog.planets {
            let Some(i) = bodies::PLANET_NAMES.iter().position(|n| *n == desc.name) else {
                log::warn!("catalog names unknown planet {:?}", desc.name);
                continue;
            };
            if let Some(speed) = desc.speed {
                self.speeds[i] = speed;
            }
            if let Some(radius) = desc.orbit_radius {
                self.orbit_radii[i] = radius;
            }
            let Some(entity) = self.planet_ids[i].and_then(|id| ctx.scene.get_mut(id)) else {
                continue;
            };
            entity.pos = orbit::position(self.orbit_radii[i], self.angles[i]);
            if let Some(mesh) = entity.mesh.as_mut() {
                if let Some(radius) = desc.radius {
                    mesh.radius = radius;
                }
                if let Some([r, g, b]) = desc.color {
                    mesh.color = Color::new(r, g, b);
                }
            }
        }
    }
}
