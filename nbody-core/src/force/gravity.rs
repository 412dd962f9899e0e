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
//! Softened Newtonian gravity
//!
//! Every body is pulled toward every other body with a magnitude of
//!
//! **a = G · m_j / (r² + s)**
//!
//! where `s` is the softening term. Unlike the textbook Plummer form, `s` is
//! added straight to the squared distance, so at zero separation the pull
//! is exactly `G · m_j / s`: finite, with no special case.
//!
//! The sum is a direct O(n²) loop recomputed on every call. That is the
//! right trade for a handful of bodies; there is no tree or cache.
//!
//! # Resolution into components
//!
//! [`ForceResolution::Angular`] resolves the scalar along the displacement
//! with `atan2` then `cos`/`sin`. [`ForceResolution::Vector`] divides the
//! displacement by its length instead. The two agree to within rounding for
//! every non-zero separation. They differ only for coincident bodies: `atan2(0, 0)`
//! is `0`, so the angular form pulls along +x, while the vector form has no
//! direction to use and contributes nothing.

use crate::body::{Acceleration, Body};
use crate::config::SimulationConfig;
use super::ForceField;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Body count at which the parallel path kicks in
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 64;

/// How a scalar pull is turned into an (ax, ay) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceResolution {
    /// `atan2` of the displacement, then `cos` and `sin`
    #[default]
    Angular,
    /// Displacement divided by distance
    Vector,
}

/// Direct-summation gravity with additive softening
///
/// # Example
///
/// ```
/// use nbody_core::body::{Body, BodyState};
/// use nbody_core::force::{ForceField, GravityField};
///
/// let field = GravityField::new(1.0, 100.0);
/// let bodies = vec![
///     Body::new(BodyState::new(0.0, 0.0, 0.0, 0.0, 10_000.0).unwrap(), 200).unwrap(),
///     Body::new(BodyState::new(200.0, 0.0, 0.0, 2.5, 100.0).unwrap(), 200).unwrap(),
/// ];
///
/// let acc = field.accelerations(&bodies);
/// assert!(acc[0].ax() > 0.0); // pulled toward +x
/// assert!(acc[1].ax() < 0.0); // pulled toward -x
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GravityField {
    g_constant: f64,
    softening: f64,
    resolution: ForceResolution,
}

impl GravityField {
    /// Create a gravity field with angular resolution
    ///
    /// # Panics
    ///
    /// Panics if `g_constant` or `softening` is not positive and finite.
    pub fn new(g_constant: f64, softening: f64) -> Self {
        assert!(
            g_constant > 0.0 && g_constant.is_finite(),
            "Gravitational constant must be positive and finite"
        );
        assert!(
            softening > 0.0 && softening.is_finite(),
            "Softening must be positive and finite"
        );
        GravityField {
            g_constant,
            softening,
            resolution: ForceResolution::Angular,
        }
    }

    /// Build from already-validated simulation constants
    pub fn from_config(config: &SimulationConfig) -> Self {
        GravityField::new(config.gravitational_constant, config.softening)
            .with_resolution(config.resolution)
    }

    /// Choose how forces are resolved into components
    pub fn with_resolution(mut self, resolution: ForceResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Gravitational constant
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Softening term added to the squared distance
    pub fn softening(&self) -> f64 {
        self.softening
    }

    /// Active resolution
    pub fn resolution(&self) -> ForceResolution {
        self.resolution
    }

    /// Scalar pull exerted by a mass at squared distance `dist_sq`
    ///
    /// At `dist_sq == 0` this is exactly `G · mass / softening`.
    pub fn pairwise_magnitude(&self, dist_sq: f64, mass: f64) -> f64 {
        self.g_constant * mass / (dist_sq + self.softening)
    }

    /// Net acceleration on body `index` from every other body
    fn acceleration_on(&self, index: usize, bodies: &[Body]) -> Acceleration {
        let target = bodies[index].position();
        let mut acc = Acceleration::zero();

        for (j, other) in bodies.iter().enumerate() {
            if j == index {
                continue;
            }

            let source = other.position();
            let dx = source.x() - target.x();
            let dy = source.y() - target.y();
            let dist_sq = dx * dx + dy * dy;
            let force = self.pairwise_magnitude(dist_sq, other.mass().value());

            match self.resolution {
                ForceResolution::Angular => {
                    let angle = dy.atan2(dx);
                    acc.add(force * angle.cos(), force * angle.sin());
                }
                ForceResolution::Vector => {
                    let dist = dist_sq.sqrt();
                    if dist > 0.0 {
                        acc.add(force * dx / dist, force * dy / dist);
                    }
                }
            }
        }

        if !acc.is_valid() {
            log::warn!(
                "gravity produced a non-finite acceleration ({}, {}) for body {}",
                acc.ax(),
                acc.ay(),
                index
            );
        }

        acc
    }

    fn accelerations_sequential(&self, bodies: &[Body]) -> Vec<Acceleration> {
        (0..bodies.len())
            .map(|i| self.acceleration_on(i, bodies))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn accelerations_parallel(&self, bodies: &[Body]) -> Vec<Acceleration> {
        // Each body's sum is still accumulated in index order, so the
        // result is bit-identical to the sequential path.
        (0..bodies.len())
            .into_par_iter()
            .map(|i| self.acceleration_on(i, bodies))
            .collect()
    }
}

impl ForceField for GravityField {
    fn name(&self) -> &str {
        "gravity"
    }

    fn accelerations(&self, bodies: &[Body]) -> Vec<Acceleration> {
        #[cfg(feature = "parallel")]
        {
            if bodies.len() >= PARALLEL_THRESHOLD {
                return self.accelerations_parallel(bodies);
            }
        }

        self.accelerations_sequential(bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyState;

    fn body(x: f64, y: f64, mass: f64) -> Body {
        Body::new(BodyState::new(x, y, 0.0, 0.0, mass).unwrap(), 8).unwrap()
    }

    #[test]
    fn test_field_creation() {
        let field = GravityField::new(1.0, 100.0);
        assert_eq!(field.name(), "gravity");
        assert_eq!(field.g_constant(), 1.0);
        assert_eq!(field.softening(), 100.0);
        assert_eq!(field.resolution(), ForceResolution::Angular);
    }

    #[test]
    #[should_panic(expected = "Gravitational constant must be positive and finite")]
    fn test_zero_g_panics() {
        GravityField::new(0.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "Softening must be positive and finite")]
    fn test_negative_softening_panics() {
        GravityField::new(1.0, -1.0);
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig::default()
            .with_gravitational_constant(2.0)
            .with_softening(4.0)
            .with_resolution(ForceResolution::Vector);
        let field = GravityField::from_config(&config);
        assert_eq!(field.g_constant(), 2.0);
        assert_eq!(field.softening(), 4.0);
        assert_eq!(field.resolution(), ForceResolution::Vector);
    }

    #[test]
    fn test_pairwise_magnitude_at_zero_distance() {
        let field = GravityField::new(1.0, 100.0);
        assert_eq!(field.pairwise_magnitude(0.0, 50.0), 0.5);
    }

    #[test]
    fn test_single_body_feels_nothing() {
        let field = GravityField::new(1.0, 100.0);
        let acc = field.accelerations(&[body(5.0, -3.0, 1000.0)]);
        assert_eq!(acc, vec![Acceleration::zero()]);
    }

    #[test]
    fn test_pull_along_axis() {
        let field = GravityField::new(1.0, 100.0);
        let bodies = [body(0.0, 0.0, 10.0), body(0.0, 10.0, 10.0)];
        let acc = field.accelerations(&bodies);

        // 1 * 10 / (100 + 100)
        assert!((acc[0].ay() - 0.05).abs() < 1e-15);
        assert!(acc[0].ax().abs() < 1e-15);
        assert!((acc[1].ay() + 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_angular_coincident_bodies_pull_along_x() {
        let field = GravityField::new(1.0, 100.0);
        let bodies = [body(1.0, 1.0, 100.0), body(1.0, 1.0, 100.0)];
        let acc = field.accelerations(&bodies);
        assert_eq!(acc[0], Acceleration::new(1.0, 0.0));
    }

    #[test]
    fn test_vector_coincident_bodies_contribute_nothing() {
        let field = GravityField::new(1.0, 100.0).with_resolution(ForceResolution::Vector);
        let bodies = [body(1.0, 1.0, 100.0), body(1.0, 1.0, 100.0)];
        let acc = field.accelerations(&bodies);
        assert_eq!(acc[0], Acceleration::zero());
    }

    #[test]
    fn test_resolutions_agree_off_axis() {
        let angular = GravityField::new(1.0, 100.0);
        let vector = angular.clone().with_resolution(ForceResolution::Vector);
        let bodies = [
            body(0.0, 0.0, 10_000.0),
            body(120.0, -35.0, 100.0),
            body(-80.0, 260.0, 50.0),
        ];

        let a = angular.accelerations(&bodies);
        let v = vector.accelerations(&bodies);
        for (a, v) in a.iter().zip(v.iter()) {
            assert!((a.ax() - v.ax()).abs() < 1e-12);
            assert!((a.ay() - v.ay()).abs() < 1e-12);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let field = GravityField::new(1.0, 100.0);
        let bodies: Vec<Body> = (0..PARALLEL_THRESHOLD + 7)
            .map(|i| {
                let t = i as f64;
                body(t * 13.0 - 400.0, (t * 0.7).sin() * 250.0, 10.0 + t)
            })
            .collect();

        assert_eq!(
            field.accelerations_parallel(&bodies),
            field.accelerations_sequential(&bodies)
        );
    }
}
