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
//! Error types for simulation construction
//!
//! Every physics operation is total once a simulation exists: the softening
//! term keeps the force law defined everywhere. The only failures are
//! degenerate inputs supplied at construction time.

use std::fmt;

/// Errors that can occur while building a simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A body's initial state is unusable (non-positive mass, non-finite
    /// position or velocity).
    InvalidBody {
        /// Index of the offending body in the input list, when known
        index: Option<usize>,
        /// Human-readable description of the problem
        reason: String,
    },
    /// A simulation constant or the body list itself is unusable.
    InvalidConfig(String),
}

impl SimulationError {
    pub(crate) fn invalid_body(reason: impl Into<String>) -> Self {
        SimulationError::InvalidBody {
            index: None,
            reason: reason.into(),
        }
    }

    /// Attach the position of the body in the input list
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            SimulationError::InvalidBody { reason, .. } => SimulationError::InvalidBody {
                index: Some(index),
                reason,
            },
            other => other,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidBody { index: Some(i), reason } => {
                write!(f, "Invalid body at index {}: {}", i, reason)
            }
            SimulationError::InvalidBody { index: None, reason } => {
                write!(f, "Invalid body: {}", reason)
            }
            SimulationError::InvalidConfig(msg) => write!(f, "Invalid simulation config: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimulationError>;
