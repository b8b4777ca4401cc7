use thiserror::Error;

/// Rejected shape parameters.
///
/// Reported synchronously by the path builders before anything reaches the
/// surface, so a failed shape leaves the surface untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("shape size must be positive, got {width}x{height}")]
    NonPositiveSize { width: f32, height: f32 },

    #[error("corner radius must not be negative, got {0}")]
    NegativeRadius(f32),

    #[error("corner radius {radius} exceeds half the smaller side ({max})")]
    RadiusTooLarge { radius: f32, max: f32 },

    #[error("shape parameters must be finite")]
    NonFinite,
}
