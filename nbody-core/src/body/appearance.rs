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
//! Presentation attributes
//!
//! Nothing in here influences the physics. A renderer pairs an
//! [`Appearance`] with each [`Body`](super::Body) to know what to call it
//! and how to paint it.

use std::fmt;

/// Renderer color, opaque to the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// A named color understood by the renderer (e.g. `"dodgerblue"`)
    Named(String),
    /// An explicit 8-bit RGB triple
    Rgb(u8, u8, u8),
}

impl Color {
    /// Shorthand for a named color
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => write!(f, "{}", name),
            Color::Rgb(r, g, b) => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}

/// Name and color of one body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    name: String,
    color: Color,
}

impl Appearance {
    /// Create an appearance
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Appearance {
            name: name.into(),
            color,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Paint color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// On-screen radius for a body of the given mass
    ///
    /// Logarithmic so a star and a planet two orders of magnitude lighter
    /// both stay visible. Masses below 1 would give a negative radius and are
    /// clamped to zero.
    pub fn radius_for(mass: f64) -> f64 {
        (mass.ln() * 2.0).max(0.0)
    }
}
