use crate::geometry::alias::Float;
use crate::material::material_index::MaterialIndex;
use crate::sdf::framework::sdf_index::SdfIndex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{kind} refers to {child} which is not in the arena yet")]
    DanglingChild { kind: &'static str, child: SdfIndex },
    #[error("{what} must be positive, got {value}")]
    NonPositiveParameter { what: &'static str, value: Float },
    #[error("{what} must not be negative, got {value}")]
    NegativeParameter { what: &'static str, value: Float },
    #[error("{what} must be finite, got {value}")]
    NonFiniteParameter { what: &'static str, value: Float },
    #[error("{index} is not registered in the warehouse")]
    UnknownMaterial { index: MaterialIndex },
    #[error("{index} is not in the arena")]
    UnknownObject { index: SdfIndex },
    #[error("scale factors must not be zero: {what:?}")]
    ZeroScale { what: String },
    #[error("invalid render settings: {what}")]
    InvalidSettings { what: String },
}

#[must_use = "the validation result must be propagated"]
pub(crate) fn ensure_positive(what: &'static str, value: Float) -> Result<Float, SceneError> {
    if value.is_nan() || value <= 0.0 {
        return Err(SceneError::NonPositiveParameter { what, value });
    }
    ensure_finite(what, value)
}

#[must_use = "the validation result must be propagated"]
pub(crate) fn ensure_non_negative(what: &'static str, value: Float) -> Result<Float, SceneError> {
    if value.is_nan() || value < 0.0 {
        return Err(SceneError::NegativeParameter { what, value });
    }
    ensure_finite(what, value)
}

#[must_use = "the validation result must be propagated"]
pub(crate) fn ensure_finite(what: &'static str, value: Float) -> Result<Float, SceneError> {
    if false == value.is_finite() {
        return Err(SceneError::NonFiniteParameter { what, value });
    }
    Ok(value)
}
