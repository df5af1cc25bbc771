//! Animation parameter table
//!
//! A minimal [`AnimationSink`] that keeps damped float parameters and pending
//! triggers, for hosts without their own animator and for inspection.

use std::collections::{HashMap, HashSet};

use stride_core::{smooth_damp, AnimationSink};

/// Float parameter carrying the current speed
pub const SPEED_PARAMETER: &str = "InputMagnitude";
/// Trigger fired when a jump starts
pub const JUMP_TRIGGER: &str = "Jump";

#[derive(Debug, Clone, Copy, Default)]
struct DampedFloat {
    value: f32,
    velocity: f32,
}

/// Named float parameters and triggers
#[derive(Debug, Clone, Default)]
pub struct AnimatorParameters {
    floats: HashMap<String, DampedFloat>,
    triggers: HashSet<String>,
    trigger_count: u64,
}

impl AnimatorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a float parameter
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).map(|param| param.value)
    }

    /// Whether a trigger is waiting to be consumed
    pub fn is_triggered(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    /// Consume a pending trigger
    pub fn take_trigger(&mut self, name: &str) -> bool {
        self.triggers.remove(name)
    }

    /// Total triggers fired since creation
    pub fn trigger_count(&self) -> u64 {
        self.trigger_count
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, name: &str, value: f32, damp_time: f32, delta_time: f32) {
        let param = self.floats.entry(name.to_owned()).or_default();
        if damp_time <= 0.0 {
            param.value = value;
            param.velocity = 0.0;
            return;
        }
        param.value = smooth_damp(
            param.value,
            value,
            &mut param.velocity,
            damp_time,
            f32::INFINITY,
            delta_time,
        );
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_owned());
        self.trigger_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_is_damped() {
        let mut params = AnimatorParameters::new();
        params.set_float(SPEED_PARAMETER, 6.0, 0.15, 0.02);

        let first = params.float(SPEED_PARAMETER).unwrap();
        assert!(first > 0.0 && first < 6.0);

        for _ in 0..200 {
            params.set_float(SPEED_PARAMETER, 6.0, 0.15, 0.02);
        }
        assert!((params.float(SPEED_PARAMETER).unwrap() - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_undamped_float_is_immediate() {
        let mut params = AnimatorParameters::new();
        params.set_float("Blend", 0.75, 0.0, 0.02);
        assert_eq!(params.float("Blend"), Some(0.75));
        assert_eq!(params.float("Missing"), None);
    }

    #[test]
    fn test_trigger_is_consumed_once() {
        let mut params = AnimatorParameters::new();
        params.set_trigger(JUMP_TRIGGER);

        assert!(params.is_triggered(JUMP_TRIGGER));
        assert!(params.take_trigger(JUMP_TRIGGER));
        assert!(!params.take_trigger(JUMP_TRIGGER));
        assert_eq!(params.trigger_count(), 1);
    }
}
