use crate::geometry::alias::Float;
use palette::LinSrgb;
use serde::Deserialize;
use strum_macros::{EnumCount, EnumIter};

pub type Color = LinSrgb<Float>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumCount, EnumIter, Deserialize)]
pub enum MaterialClass {
    #[serde(rename = "EMISSIVE")]
    Emissive,
    #[default]
    #[serde(rename = "DIFFUSE")]
    Diffuse,
    #[serde(rename = "SPECULAR")]
    Specular,
    #[serde(rename = "REFRACTIVE")]
    Dielectric,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Material {
    color: Color,
    emission: Float,
    refractive_index: Float,
    class: MaterialClass,
}

impl Material {
    pub(crate) const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    #[must_use]
    pub fn new() -> Self {
        Self { ..Self::default() }
    }

    #[must_use]
    pub fn with_class(mut self, class: MaterialClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_color(mut self, r: Float, g: Float, b: Float) -> Self {
        assert!(r >= 0.0);
        assert!(g >= 0.0);
        assert!(b >= 0.0);
        self.color = Color::new(r, g, b);
        self
    }

    #[must_use]
    pub fn with_emission(mut self, emission: Float) -> Self {
        assert!(emission >= 0.0, "emission must not be negative");
        self.emission = emission;
        self
    }

    #[must_use]
    pub fn with_refractive_index(mut self, refractive_index: Float) -> Self {
        assert!(refractive_index > 0.0, "refractive index must be positive");
        self.refractive_index = refractive_index;
        self
    }

    #[must_use]
    pub fn class(&self) -> MaterialClass {
        self.class
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn emission(&self) -> Float {
        self.emission
    }

    #[must_use]
    pub fn refractive_index(&self) -> Float {
        self.refractive_index
    }

    #[must_use]
    pub(crate) fn emitted(&self) -> Color {
        self.color * self.emission
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: Color::new(1.0, 1.0, 1.0),
            emission: 0.0,
            refractive_index: 1.0,
            class: MaterialClass::Diffuse,
        }
    }
}
