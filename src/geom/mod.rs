//! Contains geometric primitives that the sampling relies on.
//! Among these are triangles, scenes and random surface sampling.

pub mod sampling;
pub mod scene;
pub mod tri;
pub mod vtx;
