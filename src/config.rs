//! Scenario files: which sources to evaluate, on which grid, and where to probe.
//!
//! A scenario is a TOML document:
//!
//! ```toml
//! probe = [0.1, 0.0, 0.0]
//!
//! [grid]
//! kind = "planar"
//! plane = "xy"
//! offset = 0.0
//! min = [-1.0, -1.0]
//! max = [1.0, 1.0]
//! resolution = [20, 20]
//!
//! [[sources]]
//! kind = "wire"
//! current = 1.0
//! length = 2.0
//! segments = 600
//!
//! [[sources]]
//! kind = "loop"
//! current = 1.0
//! radius = 0.5
//! segments = 800
//! ```
//!
//! The field functions themselves accept any input; the checks here are where
//! degenerate discretizations get turned away before they reach them.
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::mesh::{Plane, PointGrid};
use crate::physics::{CircularLoop, Source, StraightWire};

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// Planar observation grid settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanarGridConfig {
    pub plane: Plane,
    /// (m) out-of-plane coordinate
    pub offset: f64,
    /// (m) lower in-plane bounds
    pub min: [f64; 2],
    /// (m) upper in-plane bounds
    pub max: [f64; 2],
    pub resolution: [usize; 2],
}

impl Default for PlanarGridConfig {
    fn default() -> Self {
        Self {
            plane: Plane::Xy,
            offset: 0.0,
            min: [-1.0, -1.0],
            max: [1.0, 1.0],
            resolution: [20, 20],
        }
    }
}

/// Volumetric observation grid settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VolumeGridConfig {
    /// (m)
    pub min: [f64; 3],
    /// (m)
    pub max: [f64; 3],
    pub resolution: [usize; 3],
}

impl Default for VolumeGridConfig {
    fn default() -> Self {
        Self {
            min: [-1.0; 3],
            max: [1.0; 3],
            resolution: [8; 3],
        }
    }
}

/// Observation grid of a scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridConfig {
    Planar(PlanarGridConfig),
    Volume(VolumeGridConfig),
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::Planar(PlanarGridConfig::default())
    }
}

impl GridConfig {
    /// Generate the observation points.
    pub fn build(&self) -> PointGrid {
        match self {
            GridConfig::Planar(g) => PointGrid::planar(g.plane, g.offset, g.min, g.max, g.resolution),
            GridConfig::Volume(g) => PointGrid::volume(g.min, g.max, g.resolution),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (min, max, resolution): (&[f64], &[f64], &[usize]) = match self {
            GridConfig::Planar(g) => (&g.min, &g.max, &g.resolution),
            GridConfig::Volume(g) => (&g.min, &g.max, &g.resolution),
        };
        for i in 0..min.len() {
            if !(min[i] < max[i]) {
                return Err(ConfigError::Invalid(format!(
                    "grid axis {i}: min ({}) must be below max ({})",
                    min[i], max[i]
                )));
            }
            if resolution[i] == 0 {
                return Err(ConfigError::Invalid(format!(
                    "grid axis {i}: resolution must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

fn default_probe() -> [f64; 3] {
    [0.1, 0.0, 0.0]
}

/// A complete scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub sources: Vec<Source>,
    #[serde(default)]
    pub grid: GridConfig,
    /// (m) single point for printed diagnostics
    #[serde(default = "default_probe")]
    pub probe: [f64; 3],
}

impl Default for Scenario {
    /// A 2 m wire and a 0.5 m loop, both at 1 A, on a 20x20 XY grid spanning ±1 m.
    fn default() -> Self {
        Self {
            sources: vec![
                Source::Wire(StraightWire::new(1.0, 2.0, 600)),
                Source::Loop(CircularLoop::new(1.0, 0.5, 800)),
            ],
            grid: GridConfig::default(),
            probe: default_probe(),
        }
    }
}

impl Scenario {
    /// Parse and validate a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = toml::from_str(text)?;
        scenario.validate()?;
        debug!(nsources = scenario.sources.len(), "parsed scenario");
        Ok(scenario)
    }

    /// Reject discretizations and grids the field functions would turn into garbage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::Invalid("at least one source is required".into()));
        }
        for (i, source) in self.sources.iter().enumerate() {
            let (segments, size, what) = match source {
                Source::Wire(w) => (w.segments, w.length, "length"),
                Source::Loop(l) => (l.segments, l.radius, "radius"),
            };
            if segments < 2 {
                return Err(ConfigError::Invalid(format!(
                    "source {i}: at least 2 segments are required, got {segments}"
                )));
            }
            if !(size > 0.0) || !size.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "source {i}: {what} must be positive and finite, got {size}"
                )));
            }
        }
        if self.probe.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid("probe point must be finite".into()));
        }
        self.grid.validate()
    }
}

/// Load and validate a scenario file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ConfigError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading scenario");
    let contents = std::fs::read_to_string(path)?;
    Scenario::from_toml_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{GridLayout, LoopSampling};

    #[test]
    fn default_scenario_is_valid() {
        let scenario = Scenario::default();
        scenario.validate().unwrap();
        assert_eq!(scenario.grid.build().len(), 400);
    }

    #[test]
    fn parses_full_scenario() {
        let scenario = Scenario::from_toml_str(
            r#"
            probe = [0.0, 0.0, 0.25]

            [grid]
            kind = "planar"
            plane = "xz"
            offset = 0.1
            min = [-0.5, -0.5]
            max = [0.5, 0.5]
            resolution = [5, 7]

            [[sources]]
            kind = "loop"
            current = 2.0
            radius = 0.3
            segments = 120
            sampling = "periodic"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.probe, [0.0, 0.0, 0.25]);
        assert_eq!(
            scenario.sources,
            vec![Source::Loop(
                CircularLoop::new(2.0, 0.3, 120).with_sampling(LoopSampling::Periodic)
            )]
        );
        let grid = scenario.grid.build();
        assert_eq!(grid.len(), 35);
        match grid.layout {
            GridLayout::Planar { plane, offset, .. } => {
                assert_eq!(plane, Plane::Xz);
                assert_eq!(offset, 0.1);
            }
            other => panic!("unexpected layout {other:?}"),
        }
    }

    #[test]
    fn grid_and_probe_default_when_omitted() {
        let scenario = Scenario::from_toml_str(
            r#"
            [[sources]]
            kind = "wire"
            current = 1.0
            length = 1.0
            segments = 10
            "#,
        )
        .unwrap();
        assert_eq!(scenario.grid, GridConfig::default());
        assert_eq!(scenario.probe, [0.1, 0.0, 0.0]);
    }

    #[test]
    fn volume_grid_parses() {
        let scenario = Scenario::from_toml_str(
            r#"
            [grid]
            kind = "volume"
            resolution = [2, 3, 4]

            [[sources]]
            kind = "wire"
            current = 1.0
            length = 1.0
            segments = 10
            "#,
        )
        .unwrap();
        assert_eq!(scenario.grid.build().len(), 24);
    }

    #[test]
    fn rejects_single_segment_sources() {
        let err = Scenario::from_toml_str(
            r#"
            [[sources]]
            kind = "wire"
            current = 1.0
            length = 1.0
            segments = 1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("2 segments"));
    }

    #[test]
    fn rejects_degenerate_geometry_and_grid() {
        let mut scenario = Scenario::default();
        scenario.sources[1] = Source::Loop(CircularLoop::new(1.0, 0.0, 10));
        assert!(matches!(scenario.validate(), Err(ConfigError::Invalid(_))));

        let mut scenario = Scenario::default();
        scenario.grid = GridConfig::Planar(PlanarGridConfig {
            min: [1.0, -1.0],
            max: [1.0, 1.0],
            ..Default::default()
        });
        assert!(matches!(scenario.validate(), Err(ConfigError::Invalid(_))));

        let mut scenario = Scenario::default();
        scenario.sources.clear();
        assert!(matches!(scenario.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_misspelled_keys() {
        let err = Scenario::from_toml_str(
            r#"
            [[sources]]
            kind = "loop"
            current = 1.0
            radius = 0.5
            segments = 100
            samping = "periodic"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("samping"));

        let err = Scenario::from_toml_str(
            r#"
            [grid]
            kind = "planar"
            resolutoin = [5, 5]

            [[sources]]
            kind = "wire"
            current = 1.0
            length = 1.0
            segments = 10
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = Scenario::from_toml_str(
            r#"
            prob = [0.0, 0.0, 0.0]

            [[sources]]
            kind = "wire"
            current = 1.0
            length = 1.0
            segments = 10
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Scenario::from_toml_str("sources = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_scenario("/nonexistent/scenario.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
