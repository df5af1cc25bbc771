//! Scripted input timeline for headless runs

use serde::{Deserialize, Serialize};
use stride_game::FrameInput;

/// One stretch of constant input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    /// Label shown in the log
    pub label: String,
    /// How long the step lasts in seconds
    pub duration: f32,
    /// Horizontal axis, positive is right
    pub horizontal: f32,
    /// Vertical axis, positive is forward
    pub vertical: f32,
    /// Hold the run modifier
    pub run: bool,
    /// Press jump on the first frame of the step
    pub jump: bool,
    /// Camera turn rate in degrees per second
    pub camera_turn_rate: f32,
    /// Freeze the clock for the step
    pub pause: bool,
}

impl ScriptStep {
    fn new(label: &str, duration: f32) -> Self {
        Self {
            label: label.to_owned(),
            duration,
            ..Default::default()
        }
    }

    fn axes(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }
}

/// Walk, run and jump, freeze, turn with the camera, then rest
pub fn demo_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new("walk forward", 2.0).axes(0.0, 1.0),
        ScriptStep {
            run: true,
            jump: true,
            ..ScriptStep::new("run diagonal and jump", 2.0).axes(1.0, 1.0)
        },
        ScriptStep {
            pause: true,
            ..ScriptStep::new("paused", 0.5).axes(1.0, 0.0)
        },
        ScriptStep {
            camera_turn_rate: -45.0,
            ..ScriptStep::new("strafe left while the camera turns", 2.0).axes(-1.0, 0.0)
        },
        ScriptStep::new("idle", 1.0),
    ]
}

/// Position in a script, advanced one frame at a time
#[derive(Debug, Clone)]
pub struct ScriptCursor {
    steps: Vec<ScriptStep>,
    index: usize,
    elapsed: f32,
    entered: bool,
}

/// What the script asks for on one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptFrame<'a> {
    pub step: &'a ScriptStep,
    pub input: FrameInput,
    /// First frame of the step
    pub started: bool,
}

impl ScriptCursor {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed: 0.0,
            entered: false,
        }
    }

    /// Whether every step has run
    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Input for the next frame of `frame_length` seconds of script time.
    ///
    /// Returns `None` when `frame_length` is not finite and positive, since
    /// the script could never advance.
    pub fn next_frame(&mut self, frame_length: f32) -> Option<ScriptFrame<'_>> {
        if !(frame_length.is_finite() && frame_length > 0.0) {
            return None;
        }

        while self.index < self.steps.len() && self.elapsed >= self.steps[self.index].duration {
            self.index += 1;
            self.elapsed = 0.0;
            self.entered = false;
        }

        let step = self.steps.get(self.index)?;
        let started = !self.entered;
        self.entered = true;
        self.elapsed += frame_length;

        let mut input = FrameInput::from_axes(step.horizontal, step.vertical).running(step.run);
        if step.jump && started {
            input = input.jumping();
        }

        Some(ScriptFrame {
            step,
            input,
            started,
        })
    }
}
