use serde::{Deserialize, Serialize};

/// Scene catalog describing runtime overrides for named bodies.
/// Loaded from a JSON string handed over by the host page; every field
/// other than the name is optional, so a catalog can tweak a single
/// parameter without restating the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneCatalog {
    #[serde(default)]
    pub planets: Vec<PlanetDescriptor>,
}

/// Overrides for one planet, matched by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetDescriptor {
    pub name: String,
    /// Distance of the circular orbit from the origin.
    #[serde(default)]
    pub orbit_radius: Option<f32>,
    /// Rendered sphere radius.
    #[serde(default)]
    pub radius: Option<f32>,
    /// Linear RGB color.
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    /// Orbit angle advance per tick, in radians.
    #[serde(default)]
    pub speed: Option<f32>,
}

impl SceneCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_descriptor() {
        let json = r#"{
            "planets": [
                {
                    "name": "Mars",
                    "orbit_radius": 180.0,
                    "radius": 2.5,
                    "color": [1.0, 0.4, 0.0],
                    "speed": 0.01
                }
            ]
        }"#;
        let catalog = SceneCatalog::from_json(json).unwrap();
        assert_eq!(catalog.planets.len(), 1);
        let mars = &catalog.planets[0];
        assert_eq!(mars.name, "Mars");
        assert_eq!(mars.orbit_radius, Some(180.0));
        assert_eq!(mars.color, Some([1.0, 0.4, 0.0]));
    }

    #[test]
    fn parse_minimal_descriptor() {
        let json = r#"{ "planets": [ { "name": "Venus", "speed": 0.02 } ] }"#;
        let catalog = SceneCatalog::from_json(json).unwrap();
        let venus = &catalog.planets[0];
        assert_eq!(venus.speed, Some(0.02));
        assert_eq!(venus.orbit_radius, None);
        assert_eq!(venus.radius, None);
    }

    #[test]
    fn parse_empty_catalog() {
        let catalog = SceneCatalog::from_json("{}").unwrap();
        assert!(catalog.planets.is_empty());
    }

    #[test]
    fn reject_malformed_json() {
        assert!(SceneCatalog::from_json("{ planets: [").is_err());
    }
}
