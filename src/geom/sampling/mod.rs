//! Random sampling of points on the surface of triangles.

use crate::geom::tri::Triangle;
use crate::geom::vtx::Position;

use ::rand::Rng;

use std::ops::{Mul, Add};

/// Draws barycentric weights that are uniformly distributed over the area
/// of a triangle.
///
/// Taking the square root of the first random number avoids clustering
/// of samples near the first vertex.
pub fn sample_bary<R : Rng + ?Sized>(rng: &mut R) -> [f64; 3] {
    let r1 = rng.gen::<f64>().sqrt();
    let r2 = rng.gen::<f64>();

    [
        1.0 - r1,
        r1 * (1.0 - r2),
        r1 * r2
    ]
}

/// Amount of samples to place on a triangle with the given area.
/// Every triangle gets at least one sample, even if its area is zero.
pub fn sample_count(area: f64, density: f64) -> usize {
    let count = (area * density).floor();

    if count >= 1.0 {
        count as usize
    } else {
        1
    }
}

/// Places `max(1, floor(area * density))` random samples on the given triangle.
///
/// Each sample blends all vertex attributes with the same weights, so position
/// and texture coordinates of a sample always agree.
pub fn sample_triangle<V, R>(triangle: &Triangle<V>, density: f64, rng: &mut R) -> Vec<V>
    where V : Position + Clone + Mul<f64, Output = V> + Add<V, Output = V>,
        R : Rng + ?Sized
{
    let count = sample_count(triangle.area(), density);

    (0..count)
        .map(|_| triangle.interpolate_vertex_at_bary(sample_bary(rng)))
        .collect()
}
