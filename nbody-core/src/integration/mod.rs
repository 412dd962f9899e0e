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
//! Fixed-step time integration
//!
//! An integrator advances a single body by exactly one time step, given the
//! acceleration a [`ForceField`](crate::force::ForceField) computed for it
//! from a consistent snapshot. It never looks at other bodies, which is what
//! lets the simulation compute every acceleration first and only then
//! mutate.
//!
//! # Timestep Guidelines
//!
//! - Too small: precision loss and wasted steps
//! - Too large: orbits spiral outward or fly apart
//! - The reference scene uses dt = 0.1 with masses of 50 to 10,000 at
//!   separations of a few hundred units

use crate::body::{Acceleration, Body};

mod verlet;

pub use verlet::VelocityVerletIntegrator;

/// Trait for fixed-step integration methods
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Set the timestep for this integrator
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    fn set_timestep(&mut self, dt: f64);

    /// Validate the timestep for stability
    ///
    /// Returns a warning if the timestep might cause numerical issues. The
    /// timestep is still used as given; this only advises.
    fn validate_timestep(&self) -> Result<(), String> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-9 {
            return Err(format!(
                "Warning: Timestep {} is extremely small and may cause precision loss with f64.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} is large and may cause instability. \
                Consider using smaller timesteps for better accuracy.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance `body` by one step
    ///
    /// `new_acceleration` is the acceleration computed for this body from the
    /// current snapshot; the body's stored acceleration is the previous one.
    fn step(&self, body: &mut Body, new_acceleration: Acceleration);
}
