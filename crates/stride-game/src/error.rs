/// Errors raised while validating locomotion settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid locomotion setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("grounded radius {grounded_radius} does not match collider radius {collider_radius}")]
    RadiusMismatch {
        grounded_radius: f32,
        collider_radius: f32,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors that prevent a locomotion controller from starting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocomotionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("camera reported a non-finite yaw ({0}); no usable viewpoint")]
    CameraUnavailable(f32),
}
