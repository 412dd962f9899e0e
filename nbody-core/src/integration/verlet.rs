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
//! Velocity Verlet integrator implementation
//!
//! This is the synchronized variant: the velocity update averages the
//! previous step's acceleration with the one just computed, and the
//! position update uses the already-updated velocity plus half the new
//! acceleration.
//!
//! # Algorithm
//!
//! ```text
//! v ← v + 0.5·(a_old + a_new)·dt
//! x ← x + v·dt + 0.5·a_new·dt²
//! a_old ← a_new
//! trail.push(x)
//! ```
//!
//! Only one force evaluation is needed per step, and the scheme keeps the
//! long-term energy behavior of the Verlet family far better than explicit
//! Euler does.
//!
//! # References
//!
//! - Swope, W. C., Andersen, H. C., Berens, P. H., & Wilson, K. R. (1982).
//!   A computer simulation method for the calculation of equilibrium constants for the
//!   formation of physical clusters of molecules: Application to small water clusters.
//!   The Journal of Chemical Physics, 76(1), 637-649.
//! - Verlet, L. (1967). Computer "Experiments" on Classical Fluids. I. Thermodynamical
//!   Properties of Lennard-Jones Molecules. Physical Review, 159(1), 98-103.

use crate::body::{Acceleration, Body};
use super::Integrator;

/// Velocity Verlet integrator
///
/// # Example
///
/// ```
/// use nbody_core::integration::{Integrator, VelocityVerletIntegrator};
///
/// let integrator = VelocityVerletIntegrator::new(0.1);
/// assert_eq!(integrator.timestep(), 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityVerletIntegrator {
    timestep: f64,
}

impl VelocityVerletIntegrator {
    /// Create a new velocity Verlet integrator with the given timestep
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        VelocityVerletIntegrator { timestep }
    }
}

impl Integrator for VelocityVerletIntegrator {
    fn name(&self) -> &str {
        "Velocity Verlet"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn set_timestep(&mut self, dt: f64) {
        assert!(
            dt > 0.0 && dt.is_finite(),
            "Timestep must be positive and finite"
        );
        self.timestep = dt;
    }

    fn step(&self, body: &mut Body, new_acceleration: Acceleration) {
        let dt = self.timestep;
        let old = body.acceleration();

        body.kick(
            0.5 * (old.ax() + new_acceleration.ax()) * dt,
            0.5 * (old.ay() + new_acceleration.ay()) * dt,
        );

        let vel = body.velocity();
        body.drift(
            vel.dx() * dt + 0.5 * new_acceleration.ax() * dt * dt,
            vel.dy() * dt + 0.5 * new_acceleration.ay() * dt * dt,
        );

        body.set_acceleration(new_acceleration);
        body.record_trail();

        if !body.is_valid() {
            log::warn!(
                "Verlet step left a body in an invalid state: position {:?}, velocity {:?}",
                body.position(),
                body.velocity()
            );
        }
    }
}
