
use crate::error::{Error, Result};

use ::cgmath::Vector2;
use ::image::{self, DynamicImage};

use std::path::Path;

/// Read-only RGBA image with floating point channels in the range 0..1.
///
/// Rows are stored bottom to top, so that row 0 is at `v = 0` in texture
/// space, the same convention OBJ texture coordinates use.
#[derive(Clone, Debug)]
pub struct Texture {
    width: usize,
    height: usize,
    pixels: Vec<f32>
}

impl Texture {
    /// Creates a texture from `width * height * 4` channel values, rows
    /// ordered from bottom to top.
    pub fn new(width: usize, height: usize, pixels: Vec<f32>) -> Result<Texture> {
        let expected = width * height * 4;

        if pixels.len() != expected {
            return Err(Error::TextureSize { width, height, expected, actual: pixels.len() });
        }

        Ok(Texture { width, height, pixels })
    }

    /// Converts a decoded image, flipping it so the last image row becomes
    /// texture row 0.
    pub fn from_image(image: &DynamicImage) -> Texture {
        let rgba = image.flipv().to_rgba32f();
        let (width, height) = rgba.dimensions();

        Texture {
            width: width as usize,
            height: height as usize,
            pixels: rgba.into_raw()
        }
    }

    pub fn open<P : AsRef<Path>>(path: P) -> Result<Texture> {
        let image = image::open(path)?;
        Ok(Texture::from_image(&image))
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    /// True if there is no pixel data to look colors up in.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA channels of the pixel in column `x` and row `y`, counting rows from the bottom.
    ///
    /// Returns `None` for coordinates outside of the texture.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = 4 * (y * self.width + x);
        match self.pixels.get(offset..(offset + 4)) {
            Some(&[r, g, b, a]) => Some([r, g, b, a]),
            _ => None
        }
    }

    /// Finds the pixel covering the given texture coordinates.
    ///
    /// Coordinates outside of 0..1 wrap around, so the texture repeats
    /// infinitely in both directions. Must not be called on an empty texture.
    pub fn pixel_coords(&self, texcoords: Vector2<f64>) -> (usize, usize) {
        (
            wrap(texcoords.x, self.width),
            wrap(texcoords.y, self.height)
        )
    }
}

fn wrap(coord: f64, size: usize) -> usize {
    // NaN and infinite coordinates saturate, but still end up in range
    let px = (coord * size as f64).floor() as i64;
    px.rem_euclid(size as i64) as usize
}
