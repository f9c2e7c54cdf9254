//! Render configuration
//!
//! Callers expose four tunables: physics on/off, canvas height, spring length
//! and central gravity. A [`VizConfig`] adds the graph file name and can be
//! read from YAML; every field has a default.

use crate::error::{VizError, VizResult};
use crate::graphml::DEFAULT_GRAPH_FILE;
use crate::viz::layout::{DEFAULT_CENTRAL_GRAVITY, DEFAULT_SPRING_LENGTH};
use crate::viz::{DisplayOptions, SimulationConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-request render options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Run the force simulation in the renderer
    pub physics: bool,
    /// Canvas height in pixels
    pub height: u32,
    pub spring_length: f64,
    pub central_gravity: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            physics: true,
            height: 800,
            spring_length: DEFAULT_SPRING_LENGTH,
            central_gravity: DEFAULT_CENTRAL_GRAVITY,
        }
    }
}

impl RenderOptions {
    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> VizResult<()> {
        if self.height == 0 {
            return Err(VizError::Config("height must be positive".to_string()));
        }
        if !self.spring_length.is_finite() || self.spring_length <= 0.0 {
            return Err(VizError::Config(format!(
                "spring length must be a positive number, got {}",
                self.spring_length
            )));
        }
        if !self.central_gravity.is_finite() || self.central_gravity < 0.0 {
            return Err(VizError::Config(format!(
                "central gravity must be a non-negative number, got {}",
                self.central_gravity
            )));
        }
        Ok(())
    }

    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig::new(self.spring_length, self.central_gravity).with_enabled(self.physics)
    }

    pub fn display(&self) -> DisplayOptions {
        DisplayOptions::with_height(self.height)
    }
}

/// File-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Graph file name inside a project directory
    pub graph_file: String,
    pub render: RenderOptions,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            graph_file: DEFAULT_GRAPH_FILE.to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl VizConfig {
    /// Location of the configured graph file inside a working directory
    pub fn graph_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(&self.graph_file)
    }

    pub fn from_yaml_str(input: &str) -> VizResult<Self> {
        let config: VizConfig =
            serde_yaml::from_str(input).map_err(|err| VizError::Config(err.to_string()))?;
        config.render.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> VizResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|err| {
            VizError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_yaml_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.physics);
        assert_eq!(options.height, 800);
        assert_eq!(options.spring_length, 90.0);
        assert_eq!(options.central_gravity, 0.3);
        assert!(options.validate().is_ok());
        assert_eq!(options.simulation(), SimulationConfig::default());
    }

    #[test]
    fn test_invalid_options() {
        let zero_height = RenderOptions { height: 0, ..Default::default() };
        assert!(matches!(zero_height.validate(), Err(VizError::Config(_))));

        let bad_spring = RenderOptions { spring_length: f64::NAN, ..Default::default() };
        assert!(bad_spring.validate().is_err());

        let negative_gravity = RenderOptions { central_gravity: -0.1, ..Default::default() };
        assert!(negative_gravity.validate().is_err());
    }

    #[test]
    fn test_physics_switch_reaches_simulation() {
        let options = RenderOptions { physics: false, ..Default::default() };
        assert!(!options.simulation().enabled);
        assert_eq!(options.display().height, 800);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = VizConfig::from_yaml_str("render:\n  height: 600\n  spring_length: 120\n").unwrap();
        assert_eq!(config.graph_file, DEFAULT_GRAPH_FILE);
        assert_eq!(config.render.height, 600);
        assert_eq!(config.render.spring_length, 120.0);
        assert!(config.render.physics);
    }

    #[test]
    fn test_graph_path_uses_configured_file() {
        let config = VizConfig::from_yaml_str("graph_file: entities.graphml\n").unwrap();
        assert_eq!(
            config.graph_path("work"),
            Path::new("work").join("entities.graphml")
        );
        assert_eq!(
            VizConfig::default().graph_path("work"),
            Path::new("work").join(DEFAULT_GRAPH_FILE)
        );
    }

    #[test]
    fn test_yaml_errors() {
        assert!(matches!(
            VizConfig::from_yaml_str("render: [1, 2]"),
            Err(VizError::Config(_))
        ));
        assert!(matches!(
            VizConfig::from_yaml_str("render:\n  height: 0\n"),
            Err(VizError::Config(_))
        ));
        assert!(matches!(
            VizConfig::from_yaml_file("/nonexistent/bluegraph.yaml"),
            Err(VizError::Config(_))
        ));
    }
}
