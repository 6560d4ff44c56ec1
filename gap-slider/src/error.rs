use thiserror::Error;

/// Errors reported when slider configuration or validated setters receive
/// values that would break the range invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GapSliderError {
    /// A numeric option was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending option.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The value range is inverted.
    #[error("minimum {minimum} must not exceed maximum {maximum}")]
    InvertedRange {
        /// Requested minimum.
        minimum: f32,
        /// Requested maximum.
        maximum: f32,
    },
    /// The bounds are not ordered inside the value range.
    #[error(
        "bounds must satisfy minimum <= lower <= upper <= maximum, got {lower}..{upper} in {minimum}..{maximum}"
    )]
    BoundsOutOfOrder {
        /// Requested lower bound.
        lower: f32,
        /// Requested upper bound.
        upper: f32,
        /// Range minimum.
        minimum: f32,
        /// Range maximum.
        maximum: f32,
    },
    /// A size (thumb width, viewport dimension) was negative.
    #[error("{name} must not be negative, got {value}")]
    NegativeSize {
        /// Name of the offending size.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
}

pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<f32, GapSliderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GapSliderError::NonFinite { name, value })
    }
}

pub(crate) fn ensure_size(name: &'static str, value: f32) -> Result<f32, GapSliderError> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(GapSliderError::NegativeSize { name, value });
    }
    Ok(value)
}
