use crate::geometry::alias::{Float, Point, Vector};
use crate::serialization::description_error::DescriptionError;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::Deserialize;

/// A number in a scene description: a literal, or one of `rand()`,
/// `rand(max)` and `rand(min, max)` drawn uniformly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Number {
    Value(Float),
    Expression(String),
}

impl From<Float> for Number {
    fn from(value: Float) -> Self {
        Number::Value(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct UniformRange {
    min: Float,
    max: Float,
}

#[must_use]
fn parse_expression(text: &str) -> Option<UniformRange> {
    let arguments = text.trim().strip_prefix("rand(")?.strip_suffix(')')?.trim();
    if arguments.is_empty() {
        return Some(UniformRange { min: 0.0, max: 1.0 });
    }
    let bounds: Vec<Float> = arguments.split(',').map(|bound| bound.trim().parse::<Float>().ok()).collect::<Option<_>>()?;
    match bounds.as_slice() {
        [max] => Some(UniformRange { min: 0.0, max: *max }),
        [min, max] => Some(UniformRange { min: *min, max: *max }),
        _ => None,
    }
}

/// Evaluates numbers; random draws come from one seeded generator, so a
/// description always loads into the same scene for the same seed.
pub(crate) struct NumberSource {
    generator: Pcg64Mcg,
}

impl NumberSource {
    #[must_use]
    pub(crate) fn new(seed: u64) -> Self {
        Self { generator: Pcg64Mcg::seed_from_u64(seed) }
    }

    pub(crate) fn resolve(&mut self, number: &Number) -> Result<Float, DescriptionError> {
        match number {
            Number::Value(value) => Ok(*value),
            Number::Expression(text) => {
                let range = parse_expression(text).ok_or_else(|| DescriptionError::InvalidNumber { text: text.clone() })?;
                Ok(self.generator.random::<Float>() * (range.max - range.min) + range.min)
            }
        }
    }

    pub(crate) fn resolve_vector(&mut self, numbers: &[Number; 3]) -> Result<Vector, DescriptionError> {
        Ok(Vector::new(self.resolve(&numbers[0])?, self.resolve(&numbers[1])?, self.resolve(&numbers[2])?))
    }

    pub(crate) fn resolve_point(&mut self, numbers: &[Number; 3]) -> Result<Point, DescriptionError> {
        let vector = self.resolve_vector(numbers)?;
        Ok(Point::new(vector.x, vector.y, vector.z))
    }
}
