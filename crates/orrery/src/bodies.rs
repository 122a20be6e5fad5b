/// Planetary data: orbit geometry and visual properties.
///
/// Orbit radii and sizes are exaggerated for readability rather than
/// physically scaled; the visual proportions follow the classic
/// demo layout the page was designed around.

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Names for tooltips and slider labels (indexed by planet constant).
pub const PLANET_NAMES: [&str; PLANET_COUNT] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

/// Circular orbit radii in world units.
pub const ORBIT_RADII: [f32; PLANET_COUNT] = [60.0, 90.0, 120.0, 150.0, 200.0, 240.0, 280.0, 320.0];

/// Rendered sphere radii in world units.
pub const PLANET_RADII: [f32; PLANET_COUNT] = [1.2, 2.0, 2.1, 1.6, 10.0, 8.5, 4.5, 4.3];

/// Packed 0xRRGGBB colors (indexed by planet constant).
pub const PLANET_COLORS: [u32; PLANET_COUNT] = [
    0xaaaaaa, 0xffcc00, 0x3399ff, 0xff6600, 0xff3300, 0xff9900, 0x66ccff, 0x9999ff,
];

/// Starting angular speed in radians per tick.
pub fn initial_speed(index: usize) -> f32 {
    0.005 + index as f32 * 0.001
}

/// Slider bounds for angular speed.
pub const SPEED_MIN: f32 = 0.001;
pub const SPEED_MAX: f32 = 0.05;
pub const SPEED_STEP: f32 = 0.001;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 25.0;
pub const SUN_COLOR: u32 = 0xffff00;

// ── Light ────────────────────────────────────────────────────────────

pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 3.5;
pub const LIGHT_RANGE: f32 = 2000.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 15000;
pub const STAR_EXTENT: f32 = 4000.0;
pub const STAR_SEED: u64 = 42;

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 6000.0;
pub const CAMERA_START_Z: f32 = 400.0;

/// Click-to-focus: the camera lands at this multiple of the planet
/// position, pushed back along z so the body fills the view.
pub const FOCUS_DISTANCE_SCALE: f32 = 1.5;
pub const FOCUS_DEPTH_OFFSET: f32 = 30.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths_match() {
        assert_eq!(PLANET_NAMES.len(), PLANET_COUNT);
        assert_eq!(ORBIT_RADII.len(), PLANET_COUNT);
        assert_eq!(PLANET_RADII.len(), PLANET_COUNT);
        assert_eq!(PLANET_COLORS.len(), PLANET_COUNT);
    }

    #[test]
    fn initial_speeds_within_slider_bounds() {
        for i in 0..PLANET_COUNT {
            let s = initial_speed(i);
            assert!(s >= SPEED_MIN && s <= SPEED_MAX, "planet {i}: {s}");
        }
    }

    #[test]
    fn orbits_are_strictly_increasing() {
        for pair in ORBIT_RADII.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
