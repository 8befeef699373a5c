use crate::geometry::alias::{Float, Vector};
use crate::geometry::utils::{orthonormal_basis, reflect, refract};
use crate::material::material::{Color, Material, MaterialClass};
use crate::material::material_index::MaterialIndex;
use crate::material::materials_warehouse::MaterialsWarehouse;
use cgmath::InnerSpace;
use rand::Rng;
use std::f64::consts::TAU;

/// Non-physical weight of the diffuse bounce, kept for the look it produces.
pub const DIFFUSE_ENERGY_NORMALIZATION: Float = 0.25;
/// Non-physical gain compensating the single-sample dielectric estimate.
pub const DIELECTRIC_GAIN: Float = 1.15;

/// Continuation of a path after it hits a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scattering {
    pub direction: Vector,
    pub medium: Option<MaterialIndex>,
}

#[must_use]
fn cosine_weighted_hemisphere<R: Rng + ?Sized>(normal: Vector, generator: &mut R) -> Vector {
    let radius_squared: Float = generator.random();
    let angle = TAU * generator.random::<Float>();
    let radius = radius_squared.sqrt();
    let height = (1.0 - radius_squared).max(0.0).sqrt();

    let (tangent, bitangent) = orthonormal_basis(normal);
    (tangent * (radius * angle.cos()) + bitangent * (radius * angle.sin()) + normal * height).normalize()
}

impl MaterialsWarehouse {
    /// Picks the direction a path continues in after hitting a surface made
    /// of `material`; `None` ends the path. `normal` is the outward surface
    /// normal, `medium` the material the incoming ray travels through.
    #[must_use]
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        material: MaterialIndex,
        incoming: Vector,
        normal: Vector,
        medium: Option<MaterialIndex>,
        generator: &mut R,
    ) -> Option<Scattering> {
        let surface = self.at(material);
        match surface.class() {
            MaterialClass::Emissive => None,
            MaterialClass::Diffuse => Some(Scattering {
                direction: cosine_weighted_hemisphere(normal, generator),
                medium,
            }),
            MaterialClass::Specular => Some(Scattering {
                direction: reflect(incoming, normal).normalize(),
                medium,
            }),
            MaterialClass::Dielectric => {
                let leaving = medium == Some(material);
                let facing = if leaving { -normal } else { normal };
                // A tracked medium always sets the ratio, so leaving a dielectric does not bend the ray.
                let eta = match medium {
                    Some(outer) => self.at(outer).refractive_index() / surface.refractive_index(),
                    None => 1.0 / surface.refractive_index(),
                };
                match refract(incoming, facing, eta) {
                    Some(direction) => Some(Scattering {
                        direction: direction.normalize(),
                        medium: if leaving { None } else { Some(material) },
                    }),
                    None => Some(Scattering {
                        direction: reflect(incoming, facing).normalize(),
                        medium,
                    }),
                }
            }
        }
    }
}

impl Material {
    /// Radiance leaving the surface given the radiance `recursive` gathered
    /// along `outgoing`.
    #[must_use]
    pub fn evaluate(&self, recursive: Color, outgoing: Vector, normal: Vector) -> Color {
        let emitted = self.emitted();
        match self.class() {
            MaterialClass::Emissive => emitted,
            MaterialClass::Diffuse => {
                let cosine = outgoing.dot(normal).max(0.0);
                emitted + recursive * self.color() * (cosine * DIFFUSE_ENERGY_NORMALIZATION)
            }
            MaterialClass::Specular => emitted + recursive,
            MaterialClass::Dielectric => emitted + recursive * DIELECTRIC_GAIN,
        }
    }
}
