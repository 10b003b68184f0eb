//! Error types for terrain and particle construction.

use thiserror::Error;

/// Result type for terrain construction.
pub type TerrainResult<T> = Result<T, TerrainError>;

/// Invalid construction parameters. Raised before any buffer is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid divisions must be positive, got {0}")]
    InvalidDivisions(usize),

    #[error("inverted {axis} bounds: min {min} must be below max {max}")]
    InvertedBounds { axis: char, min: f32, max: f32 },

    #[error("non-finite parameter `{0}`")]
    NonFinite(&'static str),

    #[error("drag must lie in (0, 1), got {0}")]
    InvalidDrag(f32),

    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f32),

    #[error("invalid range `{name}`: {min} > {max}")]
    InvalidRange { name: &'static str, min: f32, max: f32 },

    #[error("`{0}` must be positive")]
    NotPositive(&'static str),

    #[error("spawn batch size must be positive")]
    EmptyBatch,

    #[error("sphere of radius {radius} does not fit in the {axis} extent {extent}")]
    ParticleTooLarge { axis: char, radius: f32, extent: f32 },

    #[error("spawn extent {spawn_extent} plus radius {radius} exceeds the {axis} box half extent {half_extent}")]
    SpawnOutsideBox {
        axis: char,
        spawn_extent: f32,
        radius: f32,
        half_extent: f32,
    },
}

/// Errors raised while synthesizing a terrain mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("terrain configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("vertex {vertex} has a zero-length accumulated normal")]
    DegenerateGeometry { vertex: usize },
}

/// Validate `min < max` for one axis, rejecting NaN and infinities.
///
/// The span must be finite too, or grid spacing and sampling overflow.
pub(crate) fn check_bounds(axis: char, min: f32, max: f32) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(ConfigError::NonFinite("bounds"));
    }
    if min >= max {
        return Err(ConfigError::InvertedBounds { axis, min, max });
    }
    Ok(())
}

/// Validate a closed `[min, max]` sampling range.
pub(crate) fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(ConfigError::NonFinite(name));
    }
    if min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds('x', -1.0, 1.0).is_ok());
        assert_eq!(
            check_bounds('y', 2.0, 2.0),
            Err(ConfigError::InvertedBounds { axis: 'y', min: 2.0, max: 2.0 })
        );
        assert_eq!(
            check_bounds('x', f32::NAN, 1.0),
            Err(ConfigError::NonFinite("bounds"))
        );
    }

    #[test]
    fn test_overflowing_span_rejected() {
        assert_eq!(
            check_bounds('x', -3e38, 3e38),
            Err(ConfigError::NonFinite("bounds"))
        );
        assert_eq!(
            check_range("velocity", -3e38, 3e38),
            Err(ConfigError::NonFinite("velocity"))
        );
        assert!(check_range("velocity", -1e38, 1e38).is_ok());
    }

    #[test]
    fn test_check_range_allows_degenerate() {
        assert!(check_range("radius", 0.3, 0.3).is_ok());
        assert!(check_range("radius", 0.4, 0.3).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = TerrainError::from(ConfigError::InvalidDivisions(0));
        assert_eq!(
            err.to_string(),
            "terrain configuration error: grid divisions must be positive, got 0"
        );
    }
}
