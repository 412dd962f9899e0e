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
//! Point-mass bodies
//!
//! A [`BodyState`] is the initial condition handed to the simulation; a
//! [`Body`] is the live kinematic record the integrator mutates each step.
//! Presentation lives separately in [`Appearance`] so the physics never
//! depends on how anything is drawn.

mod appearance;
mod components;
mod trail;

pub use appearance::{Appearance, Color};
pub use components::{Acceleration, Mass, Position, Velocity};
pub use trail::{Trail, DEFAULT_TRAIL_CAPACITY};

use crate::error::{Result, SimulationError};

/// Initial conditions for one body
///
/// # Examples
///
/// ```
/// use nbody_core::body::BodyState;
///
/// let earth = BodyState::new(200.0, 0.0, 0.0, 2.5, 100.0).unwrap();
/// assert_eq!(earth.mass().value(), 100.0);
///
/// assert!(BodyState::new(0.0, 0.0, 0.0, 0.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    position: Position,
    velocity: Velocity,
    mass: Mass,
}

impl BodyState {
    /// Validate and bundle a body's initial position, velocity and mass
    ///
    /// Fails with [`SimulationError::InvalidBody`] if the mass is not
    /// positive or any coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, mass: f64) -> Result<Self> {
        let mass = Mass::try_new(mass)?;
        let position = Position::new(x, y);
        if !position.is_valid() {
            return Err(SimulationError::invalid_body(format!(
                "position must be finite, got ({}, {})",
                x, y
            )));
        }
        let velocity = Velocity::new(vx, vy);
        if !velocity.is_valid() {
            return Err(SimulationError::invalid_body(format!(
                "velocity must be finite, got ({}, {})",
                vx, vy
            )));
        }
        Ok(BodyState {
            position,
            velocity,
            mass,
        })
    }

    /// Validate a table of `[x, y, vx, vy, mass]` rows
    ///
    /// On failure the error carries the index of the first bad row.
    ///
    /// ```
    /// use nbody_core::body::BodyState;
    /// use nbody_core::SimulationError;
    ///
    /// let err = BodyState::from_rows(&[
    ///     [0.0, 0.0, 0.0, 0.0, 10.0],
    ///     [5.0, 0.0, 0.0, 1.0, 0.0],
    /// ])
    /// .unwrap_err();
    /// assert!(matches!(err, SimulationError::InvalidBody { index: Some(1), .. }));
    /// ```
    pub fn from_rows(rows: &[[f64; 5]]) -> Result<Vec<Self>> {
        rows.iter()
            .enumerate()
            .map(|(i, &[x, y, vx, vy, mass])| {
                BodyState::new(x, y, vx, vy, mass).map_err(|e| e.at_index(i))
            })
            .collect()
    }

    /// Initial position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Initial velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Mass
    pub fn mass(&self) -> Mass {
        self.mass
    }
}

/// Live kinematic state of a point mass
///
/// The acceleration stored here is the one computed on the previous step;
/// velocity Verlet averages it with the freshly computed one.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Position,
    velocity: Velocity,
    acceleration: Acceleration,
    mass: Mass,
    trail: Trail,
}

impl Body {
    /// Create a body at rest in acceleration with an empty trail
    pub fn new(state: BodyState, trail_capacity: usize) -> Result<Self> {
        Ok(Body {
            position: state.position,
            velocity: state.velocity,
            acceleration: Acceleration::zero(),
            mass: state.mass,
            trail: Trail::with_capacity(trail_capacity)?,
        })
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Acceleration computed on the most recent step, zero before the first
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    /// Mass
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Recent positions, oldest first
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Linear momentum components (m·vx, m·vy)
    pub fn momentum(&self) -> (f64, f64) {
        let m = self.mass.value();
        (m * self.velocity.dx(), m * self.velocity.dy())
    }

    /// Add a velocity change
    pub fn kick(&mut self, dvx: f64, dvy: f64) {
        self.velocity.accelerate(dvx, dvy);
    }

    /// Add a position change
    pub fn drift(&mut self, dx: f64, dy: f64) {
        self.position.translate(dx, dy);
    }

    /// Replace the stored acceleration
    pub fn set_acceleration(&mut self, acceleration: Acceleration) {
        self.acceleration = acceleration;
    }

    /// Append the current position to the trail
    pub fn record_trail(&mut self) {
        self.trail.push(self.position);
    }

    /// Check that position, velocity and acceleration are all finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid() && self.acceleration.is_valid()
    }
}
