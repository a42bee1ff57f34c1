
use crate::error::{Error, Result};
use crate::geom::tri::Triangle;
use crate::geom::vtx::{Position, Texcoords};

use ::cgmath::{Vector2, Vector3};

use std::ops::{Add, Mul};
use std::path::{Path, PathBuf};

pub struct Scene {
    pub entities: Vec<Entity>,
    /// Materials as loaded from the MTL library referenced by the OBJ
    pub materials: Vec<tobj::Material>,
    /// Directory of the OBJ file, relative texture paths are resolved against it
    pub directory: PathBuf
}

pub struct Entity {
    pub name: String,
    pub material_idx: Option<usize>,
    pub mesh: Mesh
}

pub struct Mesh {
    pub indices: Vec<u32>,
    pub positions: Vec<f64>,
    pub texcoords: Vec<f64>,
    /// Corner count of each face, empty if all faces are triangles
    pub face_arities: Vec<u32>
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f64>,
    pub texcoords: Vector2<f64>
}

impl Position for Vertex {
    fn position(&self) -> Vector3<f64> {
        self.position
    }
}

impl Texcoords for Vertex {
    fn texcoords(&self) -> Vector2<f64> {
        self.texcoords
    }
}

impl Mul<f64> for Vertex {
    type Output = Vertex;

    fn mul(self, scalar: f64) -> Vertex {
        Vertex {
            position: self.position * scalar,
            texcoords: self.texcoords * scalar
        }
    }
}

impl Add for Vertex {
    type Output = Vertex;

    fn add(self, rhs: Vertex) -> Vertex {
        Vertex {
            position: self.position + rhs.position,
            texcoords: self.texcoords + rhs.texcoords
        }
    }
}

impl Scene {
    /// Loads the obj file at the given file system path into a newly created scene.
    ///
    /// Each object or group in the OBJ becomes an entity. Fails if the file holds
    /// no faces at all. A missing or broken MTL library is not fatal, entities
    /// then just have no material.
    pub fn load_from_file<P : AsRef<Path>>(obj_file_path: P) -> Result<Scene> {
        let obj_file_path = obj_file_path.as_ref();

        let load_options = tobj::LoadOptions {
            single_index: true,
            triangulate: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };

        let (models, materials) = tobj::load_obj(obj_file_path, &load_options)?;

        let materials = materials.unwrap_or_else(|err| {
            warn!("Materials for {:?} could not be loaded, sampling without textures: {}", obj_file_path, err);
            Vec::new()
        });

        let entities : Vec<Entity> = models.into_iter()
            .map(|m| Entity {
                name: m.name,
                material_idx: m.mesh.material_id,
                mesh: Mesh {
                    indices: m.mesh.indices,
                    positions: m.mesh.positions,
                    texcoords: m.mesh.texcoords,
                    face_arities: m.mesh.face_arities
                }
            })
            .collect();

        let directory = obj_file_path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let scene = Scene { entities, materials, directory };

        if scene.triangle_count() == 0 {
            return Err(Error::NoMesh(obj_file_path.to_path_buf()));
        }

        Ok(scene)
    }

    /// Returns an iterator over the triangles in all meshes, paired with
    /// the index of the entity they belong to.
    pub fn triangles<'a>(&'a self) -> impl Iterator<Item = (usize, Triangle<Vertex>)> + 'a {
        self.entities.iter()
            .enumerate()
            .flat_map(|(entity_idx, e)| e.triangles().map(move |t| (entity_idx, t)))
    }

    /// Calculates total triangle count in scene
    pub fn triangle_count(&self) -> usize {
        self.entities.iter().map(Entity::triangle_count).sum()
    }

    /// Resolves the diffuse texture (`map_Kd`) of the material with the given index
    /// relative to the directory of the OBJ.
    pub fn diffuse_texture_path(&self, material_idx: usize) -> Option<PathBuf> {
        self.materials.get(material_idx)
            .and_then(|m| m.diffuse_texture.as_ref())
            .filter(|tex| !tex.trim().is_empty())
            .map(|tex| self.directory.join(tex.trim()))
    }
}

impl Entity {
    /// True if every vertex of the mesh carries texture coordinates.
    pub fn has_texcoords(&self) -> bool {
        self.mesh.texcoords.len() == 2 * (self.mesh.positions.len() / 3)
    }

    /// Number of triangles the faces of this entity split into.
    pub fn triangle_count(&self) -> usize {
        self.faces().map(|corners| corners.len() - 2).sum()
    }

    /// Iterates the triangles of the entity in face order.
    ///
    /// Polygons are split into a fan around their first corner. Texture coordinates
    /// must be present for all vertices, see `has_texcoords`.
    pub fn triangles<'a>(&'a self) -> impl Iterator<Item = Triangle<Vertex>> + 'a {
        let mesh = &self.mesh;

        self.faces()
            .flat_map(move |corners| {
                (1..(corners.len() - 1))
                    .map(move |i| Triangle::new(
                        mesh.vertex(corners[0]),
                        mesh.vertex(corners[i]),
                        mesh.vertex(corners[i + 1])
                    ))
            })
    }

    /// Vertex indices of every face with at least three corners.
    fn faces<'a>(&'a self) -> impl Iterator<Item = &'a [u32]> + 'a {
        let mesh = &self.mesh;

        let faces : Box<dyn Iterator<Item = &'a [u32]> + 'a> = if mesh.face_arities.is_empty() {
            Box::new(mesh.indices.chunks_exact(3))
        } else {
            Box::new(
                mesh.face_arities.iter()
                    .scan(0_usize, move |offset, &arity| {
                        let start = *offset;
                        *offset += arity as usize;
                        Some(mesh.indices.get(start..*offset).unwrap_or(&[]))
                    })
            )
        };

        faces.filter(|corners| corners.len() >= 3)
    }
}

impl Mesh {
    fn vertex(&self, idx: u32) -> Vertex {
        let idx = idx as usize;
        let p = &self.positions;
        let t = &self.texcoords;

        Vertex {
            position: Vector3::new(p[3 * idx], p[3 * idx + 1], p[3 * idx + 2]),
            texcoords: Vector2::new(t[2 * idx], t[2 * idx + 1])
        }
    }
}
