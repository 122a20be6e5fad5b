//! Frame buffer layout the host renderer copies out of WASM memory.
//! Must stay in sync with the host `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Spheres: max_spheres × 8 floats]
//! [Events: max_events × 4 floats]
//! [Camera: 16 floats]
//! [Light: 8 floats]
//! ```
//!
//! Starfield positions are static after init and are exposed through a
//! separate pointer instead of being re-copied every frame.
//!
//! Capacities are written once into the header at init; the host reads
//! them to compute section offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SPHERES: usize = 2;
pub const HEADER_SPHERE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_VIEWPORT_WIDTH: usize = 6;
pub const HEADER_VIEWPORT_HEIGHT: usize = 7;
pub const HEADER_STAR_COUNT: usize = 8;
pub const HEADER_PROTOCOL_VERSION: usize = 9;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere instance (wire format, never changes).
pub const SPHERE_FLOATS: usize = 8;

/// Floats per UI event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Floats in the camera uniform (one 4x4 matrix).
pub const CAMERA_FLOATS: usize = 16;

/// Floats in the light uniform: x, y, z, intensity, r, g, b, range.
pub const LIGHT_FLOATS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sphere instances.
    pub max_spheres: usize,
    /// Maximum UI events per frame.
    pub max_events: usize,

    /// Size of the sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of the event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where the light uniform begins.
    pub light_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute the layout from raw capacity values.
    pub fn new(max_spheres: usize, max_events: usize) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let sphere_data_offset = HEADER_FLOATS;
        let event_data_offset = sphere_data_offset + sphere_data_floats;
        let camera_offset = event_data_offset + event_data_floats;
        let light_offset = camera_offset + CAMERA_FLOATS;

        let buffer_total_floats = light_offset + LIGHT_FLOATS;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            max_events,
            sphere_data_floats,
            event_data_floats,
            sphere_data_offset,
            event_data_offset,
            camera_offset,
            light_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute the layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_spheres, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(16, 32);

        assert_eq!(layout.sphere_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.event_data_offset,
            layout.sphere_data_offset + layout.sphere_data_floats
        );
        assert_eq!(
            layout.camera_offset,
            layout.event_data_offset + layout.event_data_floats
        );
        assert_eq!(layout.light_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.light_offset + LIGHT_FLOATS);
    }

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_spheres, 64);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.sphere_data_floats, 64 * SPHERE_FLOATS);
        assert_eq!(layout.event_data_floats, 32 * EVENT_FLOATS);

        let expected_total = HEADER_FLOATS + 64 * 8 + 32 * 4 + CAMERA_FLOATS + LIGHT_FLOATS;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }
}
