use crate::geometry::alias::{Float, Point, Vector};
use crate::geometry::transform::Transformation;
use crate::material::material_index::MaterialIndex;
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::sdf::framework::shape::Shape;
use cgmath::InnerSpace;

/// Relative half step of the normal estimate; well above the rounding
/// level of `Float`, so differences stay meaningful.
pub const DEFAULT_NORMAL_EPSILON: Float = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrozenNode {
    shape: Shape,
    transformation: Transformation,
    material: Option<MaterialIndex>,
}

impl FrozenNode {
    #[must_use]
    pub(crate) fn new(shape: Shape, transformation: Transformation, material: Option<MaterialIndex>) -> Self {
        Self { shape, transformation, material }
    }

    #[must_use]
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    #[must_use]
    pub fn material(&self) -> Option<MaterialIndex> {
        self.material
    }
}

/// The node graph with every placement resolved for one instant; plain data,
/// safe to share between render workers.
#[derive(Clone, Debug, PartialEq)]
pub struct FrozenGraph {
    nodes: Vec<FrozenNode>,
}

impl FrozenGraph {
    #[must_use]
    pub(crate) fn new(nodes: Vec<FrozenNode>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn node(&self, index: SdfIndex) -> &FrozenNode {
        &self.nodes[index.0]
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn signed_distance(&self, index: SdfIndex, point: Point) -> Float {
        let node = self.node(index);
        node.shape.distance(node.transformation.to_local(point), self)
    }

    #[must_use]
    pub fn evaluate(&self, index: SdfIndex, point: Point) -> Float {
        self.signed_distance(index, point).abs()
    }

    /// Surface normal from central differences taken in the node's local
    /// space. The half step along each local axis is `epsilon` scaled by the
    /// magnitude of that coordinate (at least one).
    #[must_use]
    pub fn normal(&self, index: SdfIndex, point: Point, epsilon: Float) -> Vector {
        let node = self.node(index);
        let local = node.transformation.to_local(point);

        let derivative = |shift: fn(Point, Float) -> Point, coordinate: fn(&Point) -> Float| {
            let step = epsilon * coordinate(&local).abs().max(1.0);
            let ahead = shift(local, step);
            let behind = shift(local, -step);
            let span = coordinate(&ahead) - coordinate(&behind);
            if span == 0.0 {
                return 0.0;
            }
            (node.shape.distance(ahead, self) - node.shape.distance(behind, self)) / span
        };

        let gradient = Vector::new(
            derivative(|p, d| Point::new(p.x + d, p.y, p.z), |p| p.x),
            derivative(|p, d| Point::new(p.x, p.y + d, p.z), |p| p.y),
            derivative(|p, d| Point::new(p.x, p.y, p.z + d), |p| p.z),
        );

        let world = node.transformation.of_surface_vector(gradient);
        let length = world.magnitude();
        if length > 0.0 && length.is_finite() {
            world / length
        } else {
            node.transformation.of_surface_vector(Vector::unit_y()).normalize()
        }
    }
}

impl Descendants for FrozenGraph {
    fn signed_distance(&self, child: SdfIndex, point: Point) -> Float {
        FrozenGraph::signed_distance(self, child, point)
    }
}
