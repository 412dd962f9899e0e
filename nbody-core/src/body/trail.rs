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
//! Bounded position history
//!
//! Each body remembers its most recent positions so a renderer can draw a
//! fading trail behind it. The history is a fixed-capacity FIFO: appending
//! past capacity evicts the oldest entry, so memory stays flat no matter
//! how long the simulation runs.

use std::collections::VecDeque;

use super::Position;
use crate::error::{Result, SimulationError};

/// Default number of positions kept per body
pub const DEFAULT_TRAIL_CAPACITY: usize = 200;

/// Fixed-capacity FIFO of past positions, oldest first
///
/// # Examples
///
/// ```
/// use nbody_core::body::{Position, Trail};
///
/// let mut trail = Trail::with_capacity(2).unwrap();
/// trail.push(Position::new(0.0, 0.0));
/// trail.push(Position::new(1.0, 0.0));
/// trail.push(Position::new(2.0, 0.0));
///
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.oldest(), Some(Position::new(1.0, 0.0)));
/// assert_eq!(trail.newest(), Some(Position::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Position>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` positions
    ///
    /// Fails with [`SimulationError::InvalidConfig`] for a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "trail capacity must be at least 1".to_string(),
            ));
        }
        Ok(Trail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a position at the tail, evicting the head once over capacity
    pub fn push(&mut self, position: Position) {
        self.points.push_back(position);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Number of positions currently stored
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no positions have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of positions kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the trail has reached capacity
    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    /// Oldest recorded position (the head)
    pub fn oldest(&self) -> Option<Position> {
        self.points.front().copied()
    }

    /// Most recent position (the tail)
    pub fn newest(&self) -> Option<Position> {
        self.points.back().copied()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.points.iter()
    }

    /// Drop every recorded position, keeping the capacity
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Trail {
            points: VecDeque::with_capacity(DEFAULT_TRAIL_CAPACITY),
            capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Position;
    type IntoIter = std::collections::vec_deque::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
