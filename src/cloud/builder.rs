
use std::collections::HashMap;
use std::mem;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::geom::scene::Scene;
use crate::sink::{PointCloudSink, ObjSink, XyzSink};
use crate::tex::Texture;

use super::conversion::Conversion;
use super::PointCloudRecord;

enum SceneSource {
    ObjFile(PathBuf),
    Loaded(Scene)
}

enum TextureSource {
    ImageFile(PathBuf),
    Loaded(Texture)
}

/// Builds a conversion according to provided parameters.
///
/// # Examples
///
/// The following example loads `"scenes/statue/statue.obj"` and writes a
/// point cloud with 500 points per square unit, colored with the diffuse
/// textures of the OBJ materials.
///
/// ```no_run
/// use texcloud::ConversionBuilder;
///
/// # fn main() -> texcloud::Result<()> {
/// let cloud = ConversionBuilder::new()
///     .scene("scenes/statue/statue.obj")
///     .density(500.0)
///     .seed(42)
///     .add_sink_xyz("output/statue.xyz")
///     .build()?
///     .run()?;
///
/// println!("{} points", cloud.len());
/// # Ok(())
/// # }
/// ```
pub struct ConversionBuilder {
    scene: Option<SceneSource>,
    texture_override: Option<TextureSource>,
    density: f64,
    seed: Option<u64>,
    skip_degenerate: bool,
    parallel: bool,
    sinks: Vec<Box<dyn PointCloudSink>>
}

impl Default for ConversionBuilder {
    fn default() -> Self {
        ConversionBuilder::new()
    }
}

impl ConversionBuilder {
    pub fn new() -> ConversionBuilder {
        ConversionBuilder {
            scene: None,
            texture_override: None,
            density: 1000.0,
            seed: None,
            skip_degenerate: false,
            parallel: true,
            sinks: Vec::new()
        }
    }

    /// Sets the OBJ file to load when building.
    pub fn scene<P : Into<PathBuf>>(mut self, obj_file_path: P) -> ConversionBuilder {
        self.scene = Some(SceneSource::ObjFile(obj_file_path.into()));
        self
    }

    /// Uses an already loaded scene instead of an OBJ file.
    pub fn loaded_scene(mut self, scene: Scene) -> ConversionBuilder {
        self.scene = Some(SceneSource::Loaded(scene));
        self
    }

    /// Looks up colors in the given image for all entities, instead of the
    /// diffuse textures of their materials.
    pub fn texture_override<P : Into<PathBuf>>(mut self, image_path: P) -> ConversionBuilder {
        self.texture_override = Some(TextureSource::ImageFile(image_path.into()));
        self
    }

    /// Like `texture_override`, with an already loaded texture.
    pub fn texture(mut self, texture: Texture) -> ConversionBuilder {
        self.texture_override = Some(TextureSource::Loaded(texture));
        self
    }

    /// Sets the amount of points to generate per square unit of surface area.
    pub fn density(mut self, density: f64) -> ConversionBuilder {
        self.density = density;
        self
    }

    /// Makes the conversion reproducible. Without a seed, every run
    /// produces a different cloud.
    pub fn seed(mut self, seed: u64) -> ConversionBuilder {
        self.seed = Some(seed);
        self
    }

    /// If enabled, triangles with zero area produce no points. By default
    /// they get a single point like every other triangle.
    pub fn skip_degenerate(mut self, skip_degenerate: bool) -> ConversionBuilder {
        self.skip_degenerate = skip_degenerate;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> ConversionBuilder {
        self.parallel = parallel;
        self
    }

    pub fn add_sink<S : PointCloudSink + 'static>(mut self, sink: S) -> ConversionBuilder {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Writes the cloud as XYZRGB text to the given path.
    pub fn add_sink_xyz<P : Into<PathBuf>>(self, xyz_path: P) -> ConversionBuilder {
        self.add_sink(XyzSink::new(xyz_path))
    }

    /// Writes the cloud as OBJ with vertex colors to the given path.
    pub fn add_sink_obj<P : Into<PathBuf>>(self, obj_path: P) -> ConversionBuilder {
        self.add_sink(ObjSink::new(obj_path))
    }

    /// Loads scene and textures and checks the parameters.
    ///
    /// Fails if no scene was set, the scene has no faces, any entity with faces
    /// lacks texture coordinates, the density is not a positive number or
    /// the resulting point cloud would not fit into memory.
    /// Textures that cannot be loaded are not an error, the affected surfaces
    /// will be white.
    pub fn build(self) -> Result<Conversion> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(Error::InvalidDensity(self.density));
        }

        let scene = match self.scene {
            Some(SceneSource::ObjFile(path)) => {
                info!("Loading OBJ at {:?}...", path);
                let scene = Scene::load_from_file(&path)?;
                info!("Ok, {} entities, {} triangles", scene.entities.len(), scene.triangle_count());
                scene
            },
            Some(SceneSource::Loaded(scene)) => scene,
            None => return Err(Error::MissingScene)
        };

        let untextured = scene.entities.iter()
            .find(|e| e.triangle_count() > 0 && !e.has_texcoords());

        if let Some(entity) = untextured {
            return Err(Error::MissingTexcoords { entity: entity.name.clone() });
        }

        let expected_points = expected_point_count(&scene, self.density, self.skip_degenerate);
        if expected_points > max_point_count() {
            return Err(Error::TooManyPoints(expected_points));
        }

        let texture_override = match self.texture_override {
            Some(TextureSource::ImageFile(path)) => load_texture(&path),
            Some(TextureSource::Loaded(texture)) => Some(texture),
            None => None
        };

        let material_textures = if texture_override.is_some() {
            Vec::new()
        } else {
            load_material_textures(&scene)
        };

        Ok(Conversion::new(
            scene,
            material_textures,
            texture_override,
            self.density,
            self.seed,
            self.skip_degenerate,
            self.parallel,
            self.sinks
        ))
    }
}

/// Total amount of points sampling the scene will produce, as a float so
/// that huge areas or densities cannot overflow.
fn expected_point_count(scene: &Scene, density: f64, skip_degenerate: bool) -> f64 {
    scene.triangles()
        .map(|(_, tri)| tri)
        .filter(|tri| !(skip_degenerate && tri.is_degenerate()))
        .map(|tri| (tri.area() * density).floor().max(1.0))
        .sum()
}

/// Largest point cloud that fits into memory addressable on this platform.
fn max_point_count() -> f64 {
    (isize::MAX as usize / mem::size_of::<PointCloudRecord>()) as f64
}

/// Loads the diffuse texture of every material that is used by an entity,
/// each file only once.
fn load_material_textures(scene: &Scene) -> Vec<Option<Texture>> {
    let mut by_path : HashMap<PathBuf, Option<Texture>> = HashMap::new();

    (0..scene.materials.len())
        .map(|material_idx| {
            let used = scene.entities.iter().any(|e| e.material_idx == Some(material_idx));
            if !used {
                return None;
            }

            let path = match scene.diffuse_texture_path(material_idx) {
                Some(path) => path,
                None => {
                    debug!("Material {:?} has no diffuse texture, using white", scene.materials[material_idx].name);
                    return None;
                }
            };

            by_path.entry(path)
                .or_insert_with_key(|path| load_texture(path))
                .clone()
        })
        .collect()
}

fn load_texture(path: &Path) -> Option<Texture> {
    info!("Loading texture {:?}...", path);

    match Texture::open(path) {
        Ok(texture) => {
            debug!("Ok, {}x{}", texture.width(), texture.height());
            Some(texture)
        },
        Err(err) => {
            warn!("Texture {:?} could not be loaded, using white instead: {}", path, err);
            None
        }
    }
}
