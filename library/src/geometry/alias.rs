use cgmath::{Matrix4, Point3, Quaternion, Vector2, Vector3, Vector4};

pub type Float = f64;

pub type Point = Point3<Float>;
pub type Vector = Vector3<Float>;
pub type Vector2D = Vector2<Float>;
pub type Vector4D = Vector4<Float>;
pub type Rotation = Quaternion<Float>;
pub type Affine = Matrix4<Float>;
