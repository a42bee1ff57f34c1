
use super::PointCloudSink;

use crate::cloud::PointCloud;
use crate::error::Result;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Dumps the point cloud as an OBJ consisting only of vertices, with the
/// colors appended to each vertex as floats in 0..1. Most mesh viewers
/// can display these.
pub struct ObjSink {
    obj_path: PathBuf
}

impl ObjSink {
    pub fn new<P : Into<PathBuf>>(obj_path: P) -> ObjSink {
        ObjSink { obj_path: obj_path.into() }
    }
}

impl PointCloudSink for ObjSink {
    fn serialize(&self, cloud: &PointCloud) -> Result<()> {
        info!("Writing OBJ point dump {:?}...", self.obj_path);

        let mut obj = BufWriter::new(File::create(&self.obj_path)?);

        writeln!(obj, "# texcloud point cloud, {} points", cloud.len())?;
        writeln!(obj, "o point_cloud")?;

        for record in cloud.iter() {
            let p = record.position;
            let [r, g, b] = record.color;
            writeln!(
                obj,
                "v {} {} {} {} {} {}",
                p.x, p.y, p.z,
                f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0
            )?;
        }

        obj.flush()?;
        Ok(())
    }
}
