use crate::animation::animated::{Animated, TimeSpan};
use crate::geometry::alias::{Float, Rotation, Vector};
use crate::geometry::transform::Transformation;

/// Where a node sits in its parent's space: a fixed transformation followed by
/// optional animated scale, rotation and translation (applied in that order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    base: Transformation,
    scale: Option<Animated<Vector>>,
    rotation: Option<Animated<Rotation>>,
    translation: Option<Animated<Vector>>,
}

impl Placement {
    #[must_use]
    pub fn new(base: Transformation) -> Self {
        Self { base, ..Self::default() }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Animated<Vector>) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Animated<Rotation>) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[must_use]
    pub fn with_translation(mut self, translation: Animated<Vector>) -> Self {
        self.translation = Some(translation);
        self
    }

    #[must_use]
    pub fn base(&self) -> &Transformation {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Transformation {
        &mut self.base
    }

    #[must_use]
    pub fn resolve(&self, time: Float) -> Transformation {
        let mut result = self.base;
        if let Some(scale) = &self.scale {
            result.scale(scale.at(time));
        }
        if let Some(rotation) = &self.rotation {
            result.rotate_by(rotation.at(time));
        }
        if let Some(translation) = &self.translation {
            result.translate(translation.at(time));
        }
        result
    }

    #[must_use]
    pub fn time_span(&self) -> Option<TimeSpan> {
        let scale = self.scale.as_ref().and_then(|scale| scale.time_span());
        let rotation = self.rotation.as_ref().and_then(|rotation| rotation.time_span());
        let translation = self.translation.as_ref().and_then(|translation| translation.time_span());
        TimeSpan::merge(TimeSpan::merge(scale, rotation), translation)
    }
}
