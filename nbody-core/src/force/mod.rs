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
//! Force fields
//!
//! A force field turns a snapshot of every body's position and mass into
//! one acceleration per body. It reads the bodies and writes nothing, so
//! the whole acceleration set is computed before any body moves.

mod gravity;

pub use gravity::{ForceResolution, GravityField};

use crate::body::{Acceleration, Body};

/// Source of accelerations for a set of bodies
///
/// Implementations must return exactly one acceleration per input body, in
/// input order, and must not depend on anything but the bodies passed in
/// and their own fixed parameters.
pub trait ForceField: Send + Sync {
    /// Name of this force field, for logging
    fn name(&self) -> &str;

    /// Net acceleration on every body
    fn accelerations(&self, bodies: &[Body]) -> Vec<Acceleration>;
}
