use crate::geometry::alias::Float;
use crate::scene::error::SceneError;
use crate::sdf::framework::frozen_graph::DEFAULT_NORMAL_EPSILON;
use derive_more::Display;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Deserialize)]
#[display("{width}x{height}")]
#[serde(from = "ResolutionDescription")]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn pixels_count(&self) -> usize {
        self.width * self.height
    }
}

/// Either one number for a square image or a `[width, height]` pair.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResolutionDescription {
    Square(usize),
    Pair([usize; 2]),
}

impl From<ResolutionDescription> for Resolution {
    fn from(value: ResolutionDescription) -> Self {
        match value {
            ResolutionDescription::Square(size) => Resolution::new(size, size),
            ResolutionDescription::Pair([width, height]) => Resolution::new(width, height),
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Accepts `WIDTHxHEIGHT` or a single number.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|error| format!("bad resolution '{text}': {error}"));
        match text.split_once(['x', 'X']) {
            Some((width, height)) => Ok(Resolution::new(parse(width)?, parse(height)?)),
            None => {
                let size = parse(text)?;
                Ok(Resolution::new(size, size))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    pub maximum_distance: Float,
    pub epsilon_distance: Float,
    pub resolution: Resolution,
    pub maximum_depth: usize,
    pub spp: usize,
    pub progress_bar: bool,
    /// File name template of the rendered frames.
    pub output: String,
    pub seed: u64,
    pub normal_epsilon: Float,
}

impl RenderSettings {
    pub const DEFAULT_OUTPUT: &'static str = "{frame:05}.png";

    pub fn validate(&self) -> Result<(), SceneError> {
        let problem = if self.resolution.pixels_count() == 0 {
            Some(format!("resolution {} has no pixels", self.resolution))
        } else if self.spp == 0 {
            Some("at least one sample per pixel is required".to_string())
        } else if false == (self.epsilon_distance > 0.0) {
            Some(format!("epsilon distance {} must be positive", self.epsilon_distance))
        } else if false == (self.maximum_distance > self.epsilon_distance) {
            Some(format!("maximum distance {} must exceed the epsilon distance", self.maximum_distance))
        } else if false == (self.normal_epsilon > 0.0) {
            Some(format!("normal epsilon {} must be positive", self.normal_epsilon))
        } else {
            None
        };

        match problem {
            Some(what) => Err(SceneError::InvalidSettings { what }),
            None => Ok(()),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            maximum_distance: 1e3,
            epsilon_distance: 1e-3,
            resolution: Resolution::new(100, 100),
            maximum_depth: 10,
            spp: 32,
            progress_bar: true,
            output: Self::DEFAULT_OUTPUT.to_string(),
            seed: 0,
            normal_epsilon: DEFAULT_NORMAL_EPSILON,
        }
    }
}
