use crate::geometry::alias::{Float, Point};
use crate::sdf::composition::sdf_intersection::SdfIntersection;
use crate::sdf::composition::sdf_intersection_smooth::SdfIntersectionSmooth;
use crate::sdf::composition::sdf_subtraction::SdfSubtraction;
use crate::sdf::composition::sdf_subtraction_smooth::SdfSubtractionSmooth;
use crate::sdf::composition::sdf_union::SdfUnion;
use crate::sdf::composition::sdf_union_smooth::SdfUnionSmooth;
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::sdf::modifier::sdf_elongate::SdfElongate;
use crate::sdf::modifier::sdf_onion::SdfOnion;
use crate::sdf::modifier::sdf_round::SdfRound;
use crate::sdf::object::sdf_box::SdfBox;
use crate::sdf::object::sdf_capped_cylinder_along_y::SdfCappedCylinderAlongY;
use crate::sdf::object::sdf_menger_sponge::SdfMengerSponge;
use crate::sdf::object::sdf_plane::SdfPlane;
use crate::sdf::object::sdf_pyramid::SdfPyramid;
use crate::sdf::object::sdf_sphere::SdfSphere;
use crate::sdf::object::sdf_torus_xz::SdfTorusXz;
use strum_macros::IntoStaticStr;

/// Every kind of node the graph can hold.
#[derive(Copy, Clone, Debug, PartialEq, IntoStaticStr)]
pub enum Shape {
    Sphere(SdfSphere),
    Box(SdfBox),
    Cylinder(SdfCappedCylinderAlongY),
    Torus(SdfTorusXz),
    Plane(SdfPlane),
    Pyramid(SdfPyramid),
    MengerSponge(SdfMengerSponge),

    Union(SdfUnion),
    Subtraction(SdfSubtraction),
    Intersection(SdfIntersection),
    UnionSmooth(SdfUnionSmooth),
    SubtractionSmooth(SdfSubtractionSmooth),
    IntersectionSmooth(SdfIntersectionSmooth),

    Elongate(SdfElongate),
    Round(SdfRound),
    Onion(SdfOnion),
}

impl Shape {
    #[must_use]
    fn as_sdf(&self) -> &dyn Sdf {
        match self {
            Shape::Sphere(target) => target,
            Shape::Box(target) => target,
            Shape::Cylinder(target) => target,
            Shape::Torus(target) => target,
            Shape::Plane(target) => target,
            Shape::Pyramid(target) => target,
            Shape::MengerSponge(target) => target,
            Shape::Union(target) => target,
            Shape::Subtraction(target) => target,
            Shape::Intersection(target) => target,
            Shape::UnionSmooth(target) => target,
            Shape::SubtractionSmooth(target) => target,
            Shape::IntersectionSmooth(target) => target,
            Shape::Elongate(target) => target,
            Shape::Round(target) => target,
            Shape::Onion(target) => target,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl Sdf for Shape {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        self.as_sdf().distance(point, descendants)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        self.as_sdf().descendants()
    }
}

macro_rules! impl_from_for_shape {
    ($($variant:ident => $target:ty),+ $(,)?) => {
        $(
            impl From<$target> for Shape {
                fn from(value: $target) -> Self {
                    Shape::$variant(value)
                }
            }
        )+
    };
}

impl_from_for_shape!(
    Sphere => SdfSphere,
    Box => SdfBox,
    Cylinder => SdfCappedCylinderAlongY,
    Torus => SdfTorusXz,
    Plane => SdfPlane,
    Pyramid => SdfPyramid,
    MengerSponge => SdfMengerSponge,
    Union => SdfUnion,
    Subtraction => SdfSubtraction,
    Intersection => SdfIntersection,
    UnionSmooth => SdfUnionSmooth,
    SubtractionSmooth => SdfSubtractionSmooth,
    IntersectionSmooth => SdfIntersectionSmooth,
    Elongate => SdfElongate,
    Round => SdfRound,
    Onion => SdfOnion,
);
