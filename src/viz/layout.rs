//! Force-directed layout parameters
//!
//! The renderer runs a Barnes-Hut style simulation. Only spring length,
//! central gravity and the on/off switch are exposed to callers; every other
//! constant is fixed here so the renderer never picks physics on its own.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SPRING_LENGTH: f64 = 90.0;
pub const DEFAULT_CENTRAL_GRAVITY: f64 = 0.3;

/// Force coefficients of the Barnes-Hut solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnesHut {
    /// Node repulsion; negative values push nodes apart
    pub gravitational_constant: f64,
    /// Pull of every node towards the origin
    pub central_gravity: f64,
    /// Rest length of edge springs
    pub spring_length: f64,
    pub spring_constant: f64,
    pub damping: f64,
    /// 0 disables overlap avoidance, 1 forbids any overlap
    pub avoid_overlap: f64,
}

/// Warm-up run before the first frame is shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stabilization {
    pub enabled: bool,
    pub iterations: u32,
    pub update_interval: u32,
    pub only_dynamic_edges: bool,
    /// Zoom to fit the whole graph once stabilized
    pub fit: bool,
}

/// Physics configuration embedded in every scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// When false the renderer draws the initial layout and never moves nodes
    pub enabled: bool,
    pub barnes_hut: BarnesHut,
    pub max_velocity: f64,
    pub min_velocity: f64,
    pub solver: Solver,
    pub stabilization: Stabilization,
    pub timestep: f64,
    pub adaptive_timestep: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Solver {
    BarnesHut,
}

impl SimulationConfig {
    /// Build the physics configuration from the two caller tunables
    pub fn new(spring_length: f64, central_gravity: f64) -> Self {
        Self {
            enabled: true,
            barnes_hut: BarnesHut {
                gravitational_constant: -1000.0,
                central_gravity,
                spring_length,
                spring_constant: 0.04,
                damping: 0.09,
                avoid_overlap: 0.5,
            },
            max_velocity: 50.0,
            min_velocity: 0.1,
            solver: Solver::BarnesHut,
            stabilization: Stabilization {
                enabled: true,
                iterations: 1000,
                update_interval: 100,
                only_dynamic_edges: false,
                fit: true,
            },
            timestep: 0.2,
            adaptive_timestep: true,
        }
    }

    /// Same configuration with the simulation switched on or off
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPRING_LENGTH, DEFAULT_CENTRAL_GRAVITY)
    }
}

/// Physics parameters for a render
pub fn build_simulation_config(spring_length: f64, central_gravity: f64) -> SimulationConfig {
    SimulationConfig::new(spring_length, central_gravity)
}
