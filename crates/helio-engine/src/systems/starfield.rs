use crate::core::rng::Rng;

/// Suggested point size for the host renderer, in pixels.
pub const STAR_POINT_SIZE: f32 = 0.7;

/// Static background starfield: points uniformly scattered in a cube
/// centered on the origin. Generated once at init; the position buffer
/// never changes afterwards, so the host copies it a single time.
pub struct Starfield {
    /// Flat xyz triples.
    positions: Vec<f32>,
}

impl Starfield {
    /// Scatter `count` stars in a cube with the given edge length.
    /// Deterministic for a fixed seed.
    pub fn generate(count: usize, extent: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count {
            positions.push(rng.spread(extent));
            positions.push(rng.spread(extent));
            positions.push(rng.spread(extent));
        }
        log::debug!("starfield: {count} stars in a cube of extent {extent}");
        Self { positions }
    }

    pub fn star_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Raw pointer to the xyz data for host-side reads from WASM memory.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        let field = Starfield::generate(1000, 4000.0, 7);
        assert_eq!(field.star_count(), 1000);
        assert_eq!(field.positions().len(), 3000);
    }

    #[test]
    fn stars_stay_inside_the_cube() {
        let field = Starfield::generate(2000, 4000.0, 7);
        for &c in field.positions() {
            assert!(c >= -2000.0 && c < 2000.0, "coordinate out of cube: {c}");
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Starfield::generate(100, 500.0, 42);
        let b = Starfield::generate(100, 500.0, 42);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn empty_field_is_valid() {
        let field = Starfield::generate(0, 4000.0, 1);
        assert_eq!(field.star_count(), 0);
    }
}
