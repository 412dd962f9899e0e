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
//! # nbody-core
//!
//! Softened Newtonian gravity between a handful of point masses, advanced
//! with a fixed-step velocity Verlet integrator. Each body keeps a bounded
//! trail of recent positions for a renderer to draw.
//!
//! ## Features
//!
//! - **Direct summation**: exact O(n²) pairwise gravity with additive softening
//! - **Velocity Verlet**: one force evaluation per step, symplectic
//! - **Bounded trails**: fixed-capacity FIFO history per body
//! - **Parallelization**: optional Rayon fan-out of the acceleration pass
//!   for large body counts, bit-identical to the sequential path
//!
//! ## Example
//!
//! ```rust
//! use nbody_core::{BodyState, Simulation, SimulationConfig};
//!
//! let states = vec![
//!     BodyState::new(400.0, 300.0, 0.0, 0.0, 10_000.0).unwrap(),
//!     BodyState::new(600.0, 300.0, 0.0, 2.5, 100.0).unwrap(),
//!     BodyState::new(700.0, 300.0, 0.0, 2.0, 50.0).unwrap(),
//! ];
//!
//! let mut sim = Simulation::new(states, SimulationConfig::default()).unwrap();
//! sim.update();
//!
//! for body in sim.bodies() {
//!     let _ = (body.position(), body.trail());
//! }
//! ```

#![warn(missing_docs)]

/// Bodies, their kinematic components, trails and appearance
pub mod body;

/// Wall-clock to fixed-step adapter
pub mod clock;

/// Simulation constants
pub mod config;

/// Error types
pub mod error;

/// Force fields
pub mod force;

/// Numerical integration methods
pub mod integration;

/// Renderer-facing composition and preset scenes
pub mod scene;

/// Step orchestration
pub mod simulation;

pub use body::{Body, BodyState};
pub use config::SimulationConfig;
pub use error::SimulationError;
pub use simulation::Simulation;
