// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation constants
//!
//! The constants are fixed for the lifetime of a simulation. They are chosen
//! once, validated once in [`Simulation::new`](crate::Simulation::new), and
//! never change afterwards.

use crate::body::DEFAULT_TRAIL_CAPACITY;
use crate::error::{Result, SimulationError};
use crate::force::ForceResolution;

/// Gravitational constant in simulation units
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 1.0;

/// Fixed step in simulation time units
pub const DEFAULT_TIMESTEP: f64 = 0.1;

/// Added to the squared separation before dividing
///
/// Bounds the force as two bodies approach. Note that this is an ε², not an
/// ε: it is added directly to `dx² + dy²`.
pub const DEFAULT_SOFTENING: f64 = 100.0;

/// Constants for one simulation run
///
/// # Examples
///
/// ```
/// use nbody_core::SimulationConfig;
///
/// let config = SimulationConfig::default().with_timestep(0.05);
/// assert!(config.validate().is_ok());
///
/// let broken = SimulationConfig::default().with_gravitational_constant(0.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant G
    pub gravitational_constant: f64,
    /// Fixed time step dt
    pub timestep: f64,
    /// Softening added to the squared distance
    pub softening: f64,
    /// Positions kept per body trail
    pub trail_capacity: usize,
    /// How the scalar force is resolved into components
    pub resolution: ForceResolution,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            timestep: DEFAULT_TIMESTEP,
            softening: DEFAULT_SOFTENING,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            resolution: ForceResolution::default(),
        }
    }
}

impl SimulationConfig {
    /// Set the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Set the fixed time step
    pub fn with_timestep(mut self, dt: f64) -> Self {
        self.timestep = dt;
        self
    }

    /// Set the softening term
    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    /// Set the per-body trail capacity
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    /// Set the force resolution
    pub fn with_resolution(mut self, resolution: ForceResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Check every constant
    ///
    /// G, dt and the softening term must all be positive and finite; the
    /// trail must hold at least one position.
    pub fn validate(&self) -> Result<()> {
        check_positive("gravitational constant", self.gravitational_constant)?;
        check_positive("timestep", self.timestep)?;
        check_positive("softening", self.softening)?;
        if self.trail_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "trail capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_positive(what: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig(format!(
            "{} must be positive and finite, got {}",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scene() {
        let config = SimulationConfig::default();
        assert_eq!(config.gravitational_constant, 1.0);
        assert_eq!(config.timestep, 0.1);
        assert_eq!(config.softening, 100.0);
        assert_eq!(config.trail_capacity, 200);
        assert_eq!(config.resolution, ForceResolution::Angular);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_constants() {
        let cases = [
            SimulationConfig::default().with_gravitational_constant(-1.0),
            SimulationConfig::default().with_timestep(0.0),
            SimulationConfig::default().with_timestep(f64::NAN),
            SimulationConfig::default().with_softening(0.0),
            SimulationConfig::default().with_trail_capacity(0),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(SimulationError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = SimulationConfig::default()
            .with_timestep(-0.5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("timestep"));
    }
}
