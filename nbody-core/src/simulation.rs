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
//! Simulation orchestration
//!
//! [`Simulation::update`] is one frame of physics:
//!
//! 1. the force field computes every body's acceleration from the current
//!    positions, all at once;
//! 2. the integrator advances each body with its fresh acceleration.
//!
//! Nothing moves until every acceleration is known. Moving a body early
//! would feed a half-updated snapshot to the bodies not yet processed.
//!
//! The simulation has no clock of its own. Whoever drives it (a render
//! callback, a fixed-rate timer, a test loop) calls `update` once per tick;
//! see [`FrameClock`](crate::clock::FrameClock) for tying ticks to wall time.

use crate::body::{Body, BodyState, Position};
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::force::{ForceField, GravityField};
use crate::integration::{Integrator, VelocityVerletIntegrator};

/// A set of bodies advanced in lockstep under one force field
///
/// # Example
///
/// ```
/// use nbody_core::{BodyState, Simulation, SimulationConfig};
///
/// let states = vec![
///     BodyState::new(0.0, 0.0, 0.0, 0.0, 10_000.0).unwrap(),
///     BodyState::new(200.0, 0.0, 0.0, 2.5, 100.0).unwrap(),
/// ];
/// let mut sim = Simulation::new(states, SimulationConfig::default()).unwrap();
///
/// sim.run(10);
/// assert_eq!(sim.steps(), 10);
/// assert_eq!(sim.body(1).unwrap().trail().len(), 10);
/// ```
pub struct Simulation<F: ForceField = GravityField> {
    bodies: Vec<Body>,
    field: F,
    integrator: VelocityVerletIntegrator,
    config: SimulationConfig,
    steps: u64,
}

impl Simulation<GravityField> {
    /// Create a gravitational simulation from initial body states
    ///
    /// Fails if the config is invalid or no bodies are given.
    pub fn new(states: Vec<BodyState>, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let field = GravityField::from_config(&config);
        Simulation::with_force_field(states, config, field)
    }
}

impl<F: ForceField> Simulation<F> {
    /// Create a simulation driven by a custom force field
    ///
    /// The config's timestep and trail capacity still apply; its gravity
    /// constants are only used by [`Simulation::new`].
    pub fn with_force_field(
        states: Vec<BodyState>,
        config: SimulationConfig,
        field: F,
    ) -> Result<Self> {
        config.validate()?;
        if states.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "a simulation needs at least one body".to_string(),
            ));
        }

        let bodies = states
            .into_iter()
            .map(|state| Body::new(state, config.trail_capacity))
            .collect::<Result<Vec<_>>>()?;

        let integrator = VelocityVerletIntegrator::new(config.timestep);
        if let Err(advice) = integrator.validate_timestep() {
            log::warn!("{}", advice);
        }

        log::debug!(
            "created simulation: {} bodies, field={}, integrator={}, dt={}",
            bodies.len(),
            field.name(),
            integrator.name(),
            config.timestep
        );

        Ok(Simulation {
            bodies,
            field,
            integrator,
            config,
            steps: 0,
        })
    }

    /// Advance every body by one fixed step
    pub fn update(&mut self) {
        let accelerations = self.field.accelerations(&self.bodies);
        assert_eq!(
            accelerations.len(),
            self.bodies.len(),
            "force field '{}' returned {} accelerations for {} bodies",
            self.field.name(),
            accelerations.len(),
            self.bodies.len()
        );

        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            self.integrator.step(body, acceleration);
        }

        self.steps += 1;
        log::trace!("step {} complete", self.steps);
    }

    /// Call [`update`](Self::update) `steps` times
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.update();
        }
    }

    /// All bodies, in construction order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Body at `index`
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false: a simulation holds at least one body
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Constants this simulation was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The force field in use
    pub fn force_field(&self) -> &F {
        &self.field
    }

    /// Gravitational constant
    pub fn gravitational_constant(&self) -> f64 {
        self.config.gravitational_constant
    }

    /// Fixed step size
    pub fn timestep(&self) -> f64 {
        self.integrator.timestep()
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time elapsed
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.integrator.timestep()
    }

    /// Sum of all masses
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass().value()).sum()
    }

    /// Mass-weighted mean position
    pub fn center_of_mass(&self) -> Position {
        let total = self.total_mass();
        let (mx, my) = self.bodies.iter().fold((0.0, 0.0), |(mx, my), b| {
            let m = b.mass().value();
            (mx + m * b.position().x(), my + m * b.position().y())
        });
        Position::new(mx / total, my / total)
    }

    /// Total linear momentum (px, py)
    pub fn total_momentum(&self) -> (f64, f64) {
        self.bodies.iter().fold((0.0, 0.0), |(px, py), b| {
            let (bx, by) = b.momentum();
            (px + bx, py + by)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Acceleration;

    fn state(x: f64, y: f64, vx: f64, vy: f64, m: f64) -> BodyState {
        BodyState::new(x, y, vx, vy, m).unwrap()
    }

    /// Field that pushes every body along +x with a fixed acceleration
    struct UniformField(f64);

    impl ForceField for UniformField {
        fn name(&self) -> &str {
            "uniform"
        }

        fn accelerations(&self, bodies: &[Body]) -> Vec<Acceleration> {
            vec![Acceleration::new(self.0, 0.0); bodies.len()]
        }
    }

    /// Field that forgets a body
    struct ShortField;

    impl ForceField for ShortField {
        fn name(&self) -> &str {
            "short"
        }

        fn accelerations(&self, bodies: &[Body]) -> Vec<Acceleration> {
            vec![Acceleration::zero(); bodies.len().saturating_sub(1)]
        }
    }

    #[test]
    fn test_empty_simulation_rejected() {
        let result = Simulation::new(Vec::new(), SimulationConfig::default());
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_timestep(0.0);
        let result = Simulation::new(vec![state(0.0, 0.0, 0.0, 0.0, 1.0)], config);
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_step_counter_and_elapsed() {
        let mut sim =
            Simulation::new(vec![state(0.0, 0.0, 1.0, 0.0, 1.0)], SimulationConfig::default())
                .unwrap();
        sim.run(25);
        assert_eq!(sim.steps(), 25);
        assert!((sim.elapsed() - 2.5).abs() < 1e-12);
        assert_eq!(sim.timestep(), 0.1);
        assert_eq!(sim.gravitational_constant(), 1.0);
    }

    #[test]
    fn test_custom_force_field() {
        let states = vec![state(0.0, 0.0, 0.0, 0.0, 1.0), state(10.0, 0.0, 0.0, 0.0, 5.0)];
        let mut sim =
            Simulation::with_force_field(states, SimulationConfig::default(), UniformField(2.0))
                .unwrap();
        sim.update();

        for body in sim.bodies() {
            assert_eq!(body.acceleration(), Acceleration::new(2.0, 0.0));
        }
        assert_eq!(sim.force_field().name(), "uniform");
    }

    #[test]
    #[should_panic(expected = "returned 1 accelerations for 2 bodies")]
    fn test_short_acceleration_set_panics() {
        let states = vec![state(0.0, 0.0, 0.0, 0.0, 1.0), state(1.0, 0.0, 0.0, 0.0, 1.0)];
        let mut sim =
            Simulation::with_force_field(states, SimulationConfig::default(), ShortField).unwrap();
        sim.update();
    }

    #[test]
    fn test_center_of_mass_and_momentum() {
        let states = vec![state(0.0, 0.0, 1.0, 0.0, 3.0), state(4.0, 8.0, 0.0, -1.0, 1.0)];
        let sim = Simulation::new(states, SimulationConfig::default()).unwrap();

        assert_eq!(sim.total_mass(), 4.0);
        assert_eq!(sim.center_of_mass(), Position::new(1.0, 2.0));
        assert_eq!(sim.total_momentum(), (3.0, -1.0));
    }
}
