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
//! Wall-clock to fixed-step adapter
//!
//! [`Simulation::update`](crate::Simulation::update) always advances by the
//! same dt, whatever the host's frame rate. Driving it once per frame ties
//! simulated speed to the display refresh rate. A [`FrameClock`] breaks that
//! link: feed it each frame's wall-clock duration and it says how many fixed
//! steps are due, carrying the remainder over to the next frame.

use std::time::Duration;

/// Default upper bound on steps returned for a single frame
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;

/// Fixed-step accumulator
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use nbody_core::clock::FrameClock;
///
/// // one simulated unit per wall-clock second, dt = 0.1
/// let mut clock = FrameClock::new(0.1);
/// assert_eq!(clock.advance(Duration::from_millis(250)), 2);
/// assert_eq!(clock.advance(Duration::from_millis(50)), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    timestep: f64,
    time_scale: f64,
    max_steps_per_frame: u32,
    accumulator: f64,
}

impl FrameClock {
    /// Create a clock for the given fixed step
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        FrameClock {
            timestep,
            time_scale: 1.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
            accumulator: 0.0,
        }
    }

    /// Simulated time units per wall-clock second
    ///
    /// # Panics
    ///
    /// Panics if scale is non-positive, NaN, or infinite
    pub fn with_time_scale(mut self, scale: f64) -> Self {
        assert!(
            scale > 0.0 && scale.is_finite(),
            "Time scale must be positive and finite"
        );
        self.time_scale = scale;
        self
    }

    /// Cap the number of steps a single frame may request
    ///
    /// A slow frame would otherwise ask for more steps than the next frame
    /// can afford, and the driver never catches up.
    pub fn with_max_steps_per_frame(mut self, max: u32) -> Self {
        self.max_steps_per_frame = max.max(1);
        self
    }

    /// Account for one frame and return the number of steps now due
    pub fn advance(&mut self, frame: Duration) -> usize {
        self.accumulator += frame.as_secs_f64() * self.time_scale;

        // Small tolerance so 0.3 / 0.1 counts as three steps, not two
        let due = ((self.accumulator / self.timestep) + 1e-9).floor();
        let max = f64::from(self.max_steps_per_frame);

        let steps = if due > max {
            log::debug!(
                "frame clock dropping {:.3} simulated time units (due {} steps, cap {})",
                self.accumulator - max * self.timestep,
                due,
                max
            );
            self.accumulator = 0.0;
            max
        } else {
            self.accumulator = (self.accumulator - due * self.timestep).max(0.0);
            due
        };

        steps as usize
    }

    /// Simulated time carried over to the next frame
    pub fn pending(&self) -> f64 {
        self.accumulator
    }

    /// Fraction of a step carried over, in `[0, 1)`; useful for
    /// interpolating between the last two states when drawing
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.timestep).min(1.0)
    }

    /// Forget any carried-over time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(Duration::from_millis(150)), 1);
        assert!((clock.pending() - 0.05).abs() < 1e-9);
        assert_eq!(clock.advance(Duration::from_millis(50)), 1);
        assert!(clock.pending() < 1e-9);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = FrameClock::new(0.1).with_time_scale(6.0);
        // 1/60 s * 6 = 0.1 simulated units
        assert_eq!(clock.advance(Duration::from_secs_f64(1.0 / 60.0)), 1);
    }

    #[test]
    fn test_cap_drops_backlog() {
        let mut clock = FrameClock::new(0.1).with_max_steps_per_frame(4);
        assert_eq!(clock.advance(Duration::from_secs(10)), 4);
        assert_eq!(clock.pending(), 0.0);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FrameClock::new(0.1);
        let total: usize = (0..10).map(|_| clock.advance(Duration::from_millis(20))).sum();
        assert_eq!(total, 2);
        assert!(clock.alpha() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new(0.1);
        clock.advance(Duration::from_millis(70));
        clock.reset();
        assert_eq!(clock.pending(), 0.0);
    }

    #[test]
    #[should_panic(expected = "Time scale must be positive and finite")]
    fn test_zero_time_scale_panics() {
        FrameClock::new(0.1).with_time_scale(0.0);
    }
}
