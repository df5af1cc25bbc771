//! Frame time for Stride
//!
//! Handles delta time, time scale and pause. A paused frame reports a delta of
//! exactly zero, which the locomotion controller treats as a frozen frame.

use serde::{Deserialize, Serialize};

/// Configuration for the frame clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Simulated seconds per real second
    pub time_scale: f32,
    /// Frame length used by headless loops (in seconds)
    pub frame_length: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            frame_length: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

/// Frame clock driving the simulation loop
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Simulated time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the clock is paused
    pub paused: bool,
}

impl GameTime {
    /// Create a new clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.unscaled_delta_time = raw_delta.clamp(0.0, self.config.max_delta_time);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
    }

    /// Advance by one configured frame length
    pub fn advance_frame(&mut self) {
        self.update(self.config.frame_length);
    }

    /// Whether the current frame carries no simulated time
    pub fn is_frozen(&self) -> bool {
        self.delta_time == 0.0
    }

    /// Pause the clock; subsequent frames report a zero delta
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the clock
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);

        time.pause();
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert!(time.is_frozen());
        assert_eq!(time.frame_count, 2);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut time = GameTime::default();
        time.update(5.0);
        assert_eq!(time.delta_time, time.config.max_delta_time);

        time.update(-1.0);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn test_set_time_scale() {
        let mut time = GameTime::new(TimeConfig {
            frame_length: 0.02,
            ..Default::default()
        });
        time.set_time_scale(2.0);
        time.advance_frame();
        assert!((time.delta_time - 0.04).abs() < 1e-6);

        time.set_time_scale(-1.0);
        time.advance_frame();
        assert_eq!(time.delta_time, 0.0);
        assert!(time.is_frozen());
    }

    #[test]
    fn test_advance_frame_uses_scale() {
        let mut time = GameTime::new(TimeConfig {
            time_scale: 0.5,
            frame_length: 0.02,
            ..Default::default()
        });
        time.advance_frame();
        assert!((time.delta_time - 0.01).abs() < 1e-6);
        assert!((time.total_time - 0.01).abs() < 1e-6);
    }
}
