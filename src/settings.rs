//! Simulation settings with persistence
//!
//! Settings are saved to `~/.config/stride/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stride_game::LocomotionConfig;
use stride_physics::CharacterControllerConfig;
use tracing::{info, warn};

use crate::scenario::ScriptStep;

/// All simulation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub locomotion: LocomotionConfig,
    pub character: CharacterSettings,
    pub simulation: SimulationSettings,
    pub scenario: Vec<ScriptStep>,
}

impl SimSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stride"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load settings from a specific file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let path = dir.join("settings.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(path)
    }

    /// Steps to run; the built-in demo when none are configured
    pub fn script(&self) -> Vec<ScriptStep> {
        if self.scenario.is_empty() {
            crate::scenario::demo_script()
        } else {
            self.scenario.clone()
        }
    }
}

/// Character capsule settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSettings {
    /// Capsule height in meters
    pub height: f32,
    /// Capsule radius in meters; the grounded radius must match
    pub radius: f32,
    /// Spawn position of the feet
    pub spawn: [f32; 3],
    /// Initial facing yaw in degrees
    pub facing: f32,
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.3,
            spawn: [0.0, 0.0, 0.0],
            facing: 0.0,
        }
    }
}

impl CharacterSettings {
    /// Capsule configuration for the physics character
    pub fn capsule(&self) -> CharacterControllerConfig {
        CharacterControllerConfig {
            height: self.height,
            radius: self.radius,
            ..Default::default()
        }
    }
}

/// Frame loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Length of one frame in seconds
    pub frame_length: f32,
    /// Time scale multiplier
    pub time_scale: f32,
    /// Initial camera yaw in degrees
    pub camera_yaw: f32,
    /// Log the character every this many frames (0 = never)
    pub log_every: u64,
}

impl SimulationSettings {
    /// Reject frame lengths that would never advance the script
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.frame_length.is_finite() && self.frame_length > 0.0,
            "frame_length must be finite and positive, got {}",
            self.frame_length
        );
        anyhow::ensure!(
            self.time_scale.is_finite() && self.time_scale >= 0.0,
            "time_scale must be finite and non-negative, got {}",
            self.time_scale
        );
        Ok(())
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            frame_length: 1.0 / 60.0,
            time_scale: 1.0,
            camera_yaw: 0.0,
            log_every: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings: SimSettings = toml::from_str("").unwrap();
        assert_eq!(settings.locomotion, LocomotionConfig::default());
        assert_eq!(settings.character.radius, settings.locomotion.grounded_radius);
        assert!(!settings.script().is_empty());
    }

    #[test]
    fn test_frame_length_must_be_positive() {
        assert!(SimulationSettings::default().validate().is_ok());

        for frame_length in [0.0, -0.01, f32::NAN, f32::INFINITY] {
            let simulation = SimulationSettings {
                frame_length,
                ..Default::default()
            };
            assert!(simulation.validate().is_err(), "{frame_length} accepted");
        }
    }

    #[test]
    fn test_negative_time_scale_rejected() {
        let simulation = SimulationSettings {
            time_scale: -1.0,
            ..Default::default()
        };
        assert!(simulation.validate().is_err());
    }

    #[test]
    fn test_scenario_from_toml() {
        let settings: SimSettings = toml::from_str(
            r#"
            [simulation]
            log_every = 0

            [[scenario]]
            duration = 1.5
            vertical = 1.0
            run = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.simulation.log_every, 0);
        let script = settings.script();
        assert_eq!(script.len(), 1);
        assert_eq!(script[0].duration, 1.5);
        assert!(script[0].run);
        assert!(!script[0].jump);
    }
}
