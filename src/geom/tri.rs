//!
//! Contains functionality for triangles.
//!

use ::cgmath::Vector3;
use ::cgmath::prelude::*;

use super::vtx::Position;

use std::ops::{Mul, Add};

/// The `Triangle<V>` type encapsulates three vertices.
/// A vertex must implement `geom::vtx::Position` and hence has a position
/// in 3D space.
#[derive(Copy, Clone, Debug)]
pub struct Triangle<V>
    where V : Position
{
    pub vertices: [V; 3]
}

impl<V> Triangle<V>
    where V : Position
{
    pub fn new(vertex0: V, vertex1: V, vertex2: V) -> Triangle<V> {
        Triangle {
            vertices: [vertex0, vertex1, vertex2]
        }
    }

    /// Calculates the area of the triangle as half the magnitude of the
    /// cross product of the two edges leaving the first vertex.
    ///
    /// Collinear or coincident vertices yield an area of zero.
    pub fn area(&self) -> f64 {
        let p0 = self.vertices[0].position();
        let p1 = self.vertices[1].position();
        let p2 = self.vertices[2].position();

        0.5 * (p1 - p0).cross(p2 - p0).magnitude()
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// Compute barycentric coordinates [u, v, w] for
    /// the closest point to p on the plane of the triangle.
    pub fn barycentric_at(&self, p: Vector3<f64>) -> [f64; 3] {
        let v0 = self.vertices[1].position() - self.vertices[0].position();
        let v1 = self.vertices[2].position() - self.vertices[0].position();
        let v2 = p - self.vertices[0].position();

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        [u, v, w]
    }
}

impl<V> Triangle<V>
    where V : Position + Clone + Mul<f64, Output = V> + Add<V, Output = V>
{
    /// Synthesizes a new vertex by blending all attributes of the three
    /// vertices with the given barycentric weights.
    pub fn interpolate_vertex_at_bary(&self, weights: [f64; 3]) -> V {
        let [v0, v1, v2] = self.vertices.clone();
        v0 * weights[0] + v1 * weights[1] + v2 * weights[2]
    }
}
