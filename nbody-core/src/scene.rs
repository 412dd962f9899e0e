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
//! Renderer-facing composition
//!
//! A [`Scene`] pairs a [`Simulation`] with one [`Appearance`] per body. The
//! simulation stays free of anything visual; the scene hands the renderer a
//! read-only [`RenderBody`] per body each frame.

use crate::body::{Appearance, BodyState, Color, Position, Trail};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::simulation::Simulation;

/// What a renderer needs to draw one body for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderBody<'a> {
    /// Display name
    pub name: &'a str,
    /// Paint color
    pub color: &'a Color,
    /// Current position
    pub position: Position,
    /// Mass
    pub mass: f64,
    /// On-screen radius derived from the mass
    pub radius: f64,
    /// Recent positions, oldest first
    pub trail: &'a Trail,
}

/// A simulation plus the appearance of each of its bodies
pub struct Scene {
    simulation: Simulation,
    appearances: Vec<Appearance>,
}

impl Scene {
    /// Build a scene from (initial state, appearance) pairs
    pub fn new(entries: Vec<(BodyState, Appearance)>, config: SimulationConfig) -> Result<Self> {
        let (states, appearances): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let simulation = Simulation::new(states, config)?;
        Ok(Scene {
            simulation,
            appearances,
        })
    }

    /// Advance the physics by one fixed step
    pub fn update(&mut self) {
        self.simulation.update();
    }

    /// The underlying simulation
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Appearance of every body, in body order
    pub fn appearances(&self) -> &[Appearance] {
        &self.appearances
    }

    /// Everything needed to draw the current frame
    pub fn frame(&self) -> impl ExactSizeIterator<Item = RenderBody<'_>> + '_ {
        self.simulation
            .bodies()
            .iter()
            .zip(self.appearances.iter())
            .map(|(body, appearance)| {
                let mass = body.mass().value();
                RenderBody {
                    name: appearance.name(),
                    color: appearance.color(),
                    position: body.position(),
                    mass,
                    radius: Appearance::radius_for(mass),
                    trail: body.trail(),
                }
            })
    }
}

/// A heavy star with two planets on roughly circular orbits
///
/// The star (mass 10,000) sits at rest at `(center_x, center_y)`. The first
/// planet (mass 100) starts 200 units along +x moving at 2.5 along +y; the
/// second (mass 50) starts 300 units along +x moving at 2.0 along +y.
pub fn sun_earth_mars(center_x: f64, center_y: f64) -> Result<Vec<(BodyState, Appearance)>> {
    Ok(vec![
        (
            BodyState::new(center_x, center_y, 0.0, 0.0, 10_000.0)?,
            Appearance::new("Sun", Color::named("yellow")),
        ),
        (
            BodyState::new(center_x + 200.0, center_y, 0.0, 2.5, 100.0)?,
            Appearance::new("Earth", Color::named("dodgerblue")),
        ),
        (
            BodyState::new(center_x + 300.0, center_y, 0.0, 2.0, 50.0)?,
            Appearance::new("Mars", Color::named("red")),
        ),
    ])
}
