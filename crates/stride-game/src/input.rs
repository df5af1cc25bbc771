//! Input with action-based state
//!
//! The host polls its devices and either fills a [`FrameInput`] directly or
//! records digital actions in an [`InputState`] and asks it for one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Locomotion actions a host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Move left (A by default)
    MoveLeft,
    /// Move right (D by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Run modifier (Left Shift by default)
    Run,
}

/// Everything the controller reads from input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Horizontal axis in [-1, 1], positive is right
    pub horizontal: f32,
    /// Vertical axis in [-1, 1], positive is forward
    pub vertical: f32,
    /// Run modifier held
    pub run: bool,
    /// Jump button went down this frame
    pub jump_pressed: bool,
}

impl FrameInput {
    /// Build input from raw axes, clamped to [-1, 1]
    pub fn from_axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: clamp_axis(horizontal),
            vertical: clamp_axis(vertical),
            ..Default::default()
        }
    }

    /// Same axes with the run modifier set
    pub fn running(mut self, run: bool) -> Self {
        self.run = run;
        self
    }

    /// Same axes with a jump edge
    pub fn jumping(mut self) -> Self {
        self.jump_pressed = true;
        self
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Current state of all digital inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action going down; repeats while held are not edges
    pub fn press(&mut self, action: InputAction) {
        if self.held.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Record an action going up
    pub fn release(&mut self, action: InputAction) {
        if self.held.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    /// Digital axis from a negative and a positive action (-1, 0 or 1)
    pub fn axis(&self, negative: InputAction, positive: InputAction) -> f32 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }

    /// Snapshot the state as controller input
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            horizontal: self.axis(InputAction::MoveLeft, InputAction::MoveRight),
            vertical: self.axis(InputAction::MoveBackward, InputAction::MoveForward),
            run: self.is_held(InputAction::Run),
            jump_pressed: self.is_just_pressed(InputAction::Jump),
        }
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state() {
        let mut state = InputState::new();
        state.press(InputAction::MoveForward);
        state.press(InputAction::Jump);

        assert!(state.is_held(InputAction::MoveForward));
        assert!(state.is_just_pressed(InputAction::Jump));
        assert!(!state.is_held(InputAction::Run));

        state.clear_frame();
        assert!(state.is_held(InputAction::MoveForward));
        assert!(!state.is_just_pressed(InputAction::Jump));
    }

    #[test]
    fn test_held_press_is_not_an_edge() {
        let mut state = InputState::new();
        state.press(InputAction::Jump);
        state.clear_frame();
        state.press(InputAction::Jump);
        assert!(!state.frame_input().jump_pressed);

        state.release(InputAction::Jump);
        assert!(state.is_just_released(InputAction::Jump));
    }

    #[test]
    fn test_frame_input_axes() {
        let mut state = InputState::new();
        state.press(InputAction::MoveRight);
        state.press(InputAction::MoveBackward);
        state.press(InputAction::Run);

        let input = state.frame_input();
        assert_eq!(input.horizontal, 1.0);
        assert_eq!(input.vertical, -1.0);
        assert!(input.run);

        state.press(InputAction::MoveLeft);
        assert_eq!(state.frame_input().horizontal, 0.0);
    }

    #[test]
    fn test_axes_are_clamped() {
        let input = FrameInput::from_axes(3.0, f32::NAN);
        assert_eq!(input.horizontal, 1.0);
        assert_eq!(input.vertical, 0.0);
    }
}
