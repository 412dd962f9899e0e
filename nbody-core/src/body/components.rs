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
//! Planar kinematic components
//!
//! The simulation lives in the plane, so every vector quantity carries an
//! x and a y component in double precision. These are plain `Copy` values;
//! a [`Body`](crate::body::Body) owns one of each.

use crate::error::{Result, SimulationError};

/// 2D position
///
/// # Examples
///
/// ```
/// use nbody_core::body::Position;
///
/// let pos = Position::new(200.0, -15.0);
/// assert_eq!(pos.x(), 200.0);
/// assert!(pos.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a new position with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// The origin
    pub fn zero() -> Self {
        Position::new(0.0, 0.0)
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Check if both coordinates are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Get the position as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::zero()
    }
}

/// 2D velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    /// Create a new velocity with the given components
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity { dx, dy }
    }

    /// At rest
    pub fn zero() -> Self {
        Velocity::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Get the y component
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Speed (magnitude of the velocity vector)
    pub fn magnitude(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub(crate) fn accelerate(&mut self, ddx: f64, ddy: f64) {
        self.dx += ddx;
        self.dy += ddy;
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::zero()
    }
}

/// 2D acceleration
///
/// Produced by a [`ForceField`](crate::force::ForceField), consumed by an
/// [`Integrator`](crate::integration::Integrator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    ax: f64,
    ay: f64,
}

impl Acceleration {
    /// Create a new acceleration with the given components
    pub fn new(ax: f64, ay: f64) -> Self {
        Acceleration { ax, ay }
    }

    /// Create a zero acceleration
    pub fn zero() -> Self {
        Acceleration::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn ax(&self) -> f64 {
        self.ax
    }

    /// Get the y component
    pub fn ay(&self) -> f64 {
        self.ay
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.ax.is_finite() && self.ay.is_finite()
    }

    /// Magnitude of the acceleration vector
    pub fn magnitude(&self) -> f64 {
        (self.ax * self.ax + self.ay * self.ay).sqrt()
    }

    pub(crate) fn add(&mut self, ax: f64, ay: f64) {
        self.ax += ax;
        self.ay += ay;
    }
}

impl Default for Acceleration {
    fn default() -> Self {
        Acceleration::zero()
    }
}

/// Point mass
///
/// Always strictly positive and finite. The force law never divides by the
/// mass, but the renderer takes its logarithm and a zero or negative mass
/// would poison every acceleration it contributes to.
///
/// # Examples
///
/// ```
/// use nbody_core::body::Mass;
///
/// let sun = Mass::new(10_000.0);
/// assert_eq!(sun.value(), 10_000.0);
///
/// assert!(Mass::try_new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Create a new mass
    ///
    /// # Panics
    ///
    /// Panics if the mass is not positive and finite. For fallible
    /// construction, use `try_new`.
    pub fn new(value: f64) -> Self {
        assert!(value > 0.0 && value.is_finite(), "Mass must be positive and finite");
        Mass { value }
    }

    /// Try to create a new mass
    ///
    /// Fails with [`SimulationError::InvalidBody`] if the value is zero,
    /// negative, NaN, or infinite.
    pub fn try_new(value: f64) -> Result<Self> {
        if value > 0.0 && value.is_finite() {
            Ok(Mass { value })
        } else {
            Err(SimulationError::invalid_body(format!(
                "mass must be positive and finite, got {}",
                value
            )))
        }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.value
    }
}
