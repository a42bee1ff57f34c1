//! Contains the sampling loop that turns a textured scene into a
//! colored point cloud and hands it to the sinks.

use std::time::Instant;

use crate::geom::sampling::sample_triangle;
use crate::geom::scene::{Scene, Vertex};
use crate::geom::tri::Triangle;
use crate::geom::vtx::{Position, Texcoords};
use crate::sink::PointCloudSink;
use crate::tex::{sample_texture, Texture};
use crate::error::Result;

use super::{PointCloud, PointCloudRecord};

use ::rand::{Rng, SeedableRng};
use ::rand::rngs::StdRng;
use ::rayon::prelude::*;

/// A scene ready to be converted, along with its textures and the
/// sampling parameters.
pub struct Conversion {
    scene: Scene,
    /// Textures of the scene materials, indexed like `scene.materials`
    material_textures: Vec<Option<Texture>>,
    /// If set, used for all entities instead of the material textures
    texture_override: Option<Texture>,
    /// Points per square unit of surface area
    density: f64,
    /// Seed for the master generator, fresh entropy is used if unset
    seed: Option<u64>,
    skip_degenerate: bool,
    parallel: bool,
    sinks: Vec<Box<dyn PointCloudSink>>
}

impl Conversion {
    /// Creates a new conversion.
    /// Using the builder is recommended.
    pub fn new(
        scene: Scene,
        material_textures: Vec<Option<Texture>>,
        texture_override: Option<Texture>,
        density: f64,
        seed: Option<u64>,
        skip_degenerate: bool,
        parallel: bool,
        sinks: Vec<Box<dyn PointCloudSink>>) -> Conversion
    {
        Conversion {
            scene,
            material_textures,
            texture_override,
            density,
            seed,
            skip_degenerate,
            parallel,
            sinks
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Texture to look up colors in for the entity with the given index.
    pub fn texture_for_entity(&self, entity_idx: usize) -> Option<&Texture> {
        if let Some(texture) = self.texture_override.as_ref() {
            return Some(texture);
        }

        self.scene.entities.get(entity_idx)
            .and_then(|e| e.material_idx)
            .and_then(|material_idx| self.material_textures.get(material_idx))
            .and_then(Option::as_ref)
    }

    /// Samples the point cloud and passes it to every sink in the order
    /// the sinks were added.
    pub fn run(&self) -> Result<PointCloud> {
        let cloud = self.sample();

        for sink in &self.sinks {
            sink.serialize(&cloud)?;
        }

        Ok(cloud)
    }

    /// Samples the point cloud without serializing it.
    ///
    /// Every triangle gets its own generator, seeded from a master generator in
    /// face order. The result for a fixed seed is therefore the same, no matter
    /// if triangles are sampled in parallel or not.
    pub fn sample(&self) -> PointCloud {
        let start_time = Instant::now();

        let mut master = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };

        let mut skipped = 0;
        let jobs : Vec<(usize, Triangle<Vertex>, u64)> = self.scene.triangles()
            .filter(|(_, tri)| {
                let skip = self.skip_degenerate && tri.is_degenerate();
                if skip {
                    skipped += 1;
                }
                !skip
            })
            .map(|(entity_idx, tri)| (entity_idx, tri, master.gen()))
            .collect();

        if skipped > 0 {
            debug!("Skipped {} triangles with zero area", skipped);
        }

        info!(
            "Sampling {} triangles with {} points per square unit{}...",
            jobs.len(),
            self.density,
            if self.parallel { " in parallel" } else { "" }
        );

        let textures : Vec<Option<&Texture>> = (0..self.scene.entities.len())
            .map(|entity_idx| self.texture_for_entity(entity_idx))
            .collect();
        let density = self.density;

        let sample_job = |&(entity_idx, ref tri, seed) : &(usize, Triangle<Vertex>, u64)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let texture = textures[entity_idx];

            sample_triangle(tri, density, &mut rng)
                .into_iter()
                .map(|vertex| PointCloudRecord {
                    position: vertex.position(),
                    color: sample_texture(texture, vertex.texcoords())
                })
                .collect::<Vec<_>>()
        };

        let per_triangle : Vec<Vec<PointCloudRecord>> = if self.parallel {
            jobs.par_iter().map(sample_job).collect()
        } else {
            jobs.iter().map(sample_job).collect()
        };

        let cloud = PointCloud {
            records: per_triangle.into_iter().flatten().collect()
        };

        info!("Ok, {} points, took {}ms", cloud.len(), start_time.elapsed().as_millis());

        cloud
    }
}
