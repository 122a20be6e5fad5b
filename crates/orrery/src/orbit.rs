//! Circular orbit math: pure functions, no engine dependencies.
//!
//! Angles are plain accumulating radians; the trig functions wrap them
//! implicitly, so there is no explicit modulo anywhere.

use glam::Vec3;

/// Advance an orbit angle by one tick.
pub fn advance(angle: f32, speed: f32) -> f32 {
    angle + speed
}

/// Position on a circular orbit in the ecliptic (y = 0) plane.
pub fn position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn n_ticks_accumulate_n_times_speed() {
        let speed = 0.005;
        let mut angle = 0.0;
        for _ in 0..1000 {
            angle = advance(angle, speed);
        }
        let expected = (1000.0 * speed) % TAU;
        assert!((angle % TAU - expected).abs() < 1e-3, "angle = {angle}");
    }

    #[test]
    fn position_stays_on_the_circle() {
        let radius = 150.0;
        for i in 0..100 {
            let angle = i as f32 * 0.37;
            let p = position(radius, angle);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - radius).abs() < 1e-3, "r = {r} at angle {angle}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn angle_zero_sits_on_positive_x() {
        let p = position(60.0, 0.0);
        assert!((p.x - 60.0).abs() < 1e-5);
        assert!(p.z.abs() < 1e-5);
    }
}
