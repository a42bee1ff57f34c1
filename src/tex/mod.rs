//! Texture images and color lookups at texture coordinates.

mod texture;

pub use self::texture::Texture;

use ::cgmath::Vector2;

/// Color of surfaces without a texture.
pub const UNTEXTURED_COLOR : [u8; 3] = [255, 255, 255];

/// Looks up the color of the pixel nearest to the given texture coordinates.
///
/// Returns white if there is no texture or the texture has no pixels. Channels
/// are truncated rather than rounded when converted to 8 bits, alpha is
/// dropped.
pub fn sample_texture(texture: Option<&Texture>, texcoords: Vector2<f64>) -> [u8; 3] {
    let pixel = texture
        .filter(|texture| !texture.is_empty())
        .and_then(|texture| {
            let (x, y) = texture.pixel_coords(texcoords);
            texture.pixel(x, y)
        });

    match pixel {
        Some([r, g, b, _]) => [channel_to_u8(r), channel_to_u8(g), channel_to_u8(b)],
        None => UNTEXTURED_COLOR
    }
}

fn channel_to_u8(channel: f32) -> u8 {
    let value = (f64::from(channel) * 255.0).floor();

    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}
