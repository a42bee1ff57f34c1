
use std::io;
use std::path::PathBuf;
use std::result;

use ::thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("OBJ file could not be loaded: {0}")]
    LoadScene(#[from] ::tobj::LoadError),

    #[error("image could not be decoded: {0}")]
    Image(#[from] ::image::ImageError),

    #[error("{0:?} does not contain any mesh geometry")]
    NoMesh(PathBuf),

    #[error("mesh {entity:?} has no UV coordinates, cannot look up texture colors")]
    MissingTexcoords { entity: String },

    #[error("texture of size {width}x{height} needs {expected} channel values, got {actual}")]
    TextureSize { width: usize, height: usize, expected: usize, actual: usize },

    #[error("sample density must be finite and greater than zero, got {0}")]
    InvalidDensity(f64),

    #[error("sampling would produce {0} points, more than can be held in memory")]
    TooManyPoints(f64),

    #[error("no scene was set for the conversion")]
    MissingScene,
}
