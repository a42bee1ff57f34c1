//! Converts textured triangle meshes into colored point clouds.
//!
//! Random points are placed on every triangle with a count proportional to
//! its area, and colored by looking up the texture at the interpolated
//! texture coordinates. The result can be written as XYZRGB text.

#[macro_use]
extern crate log;

mod cloud;
mod error;
pub mod geom;
pub mod sink;
pub mod tex;

pub use cloud::{Conversion, ConversionBuilder, PointCloud, PointCloudRecord};
pub use error::{Error, Result};
