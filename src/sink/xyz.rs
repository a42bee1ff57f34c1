
use super::PointCloudSink;

use crate::cloud::PointCloud;
use crate::error::Result;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes one `x y z r g b` line per point, without a header.
/// An existing file at the path is overwritten.
pub struct XyzSink {
    path: PathBuf
}

impl XyzSink {
    pub fn new<P : Into<PathBuf>>(path: P) -> XyzSink {
        XyzSink { path: path.into() }
    }
}

impl PointCloudSink for XyzSink {
    fn serialize(&self, cloud: &PointCloud) -> Result<()> {
        info!("Writing {} points to {:?}...", cloud.len(), self.path);

        let mut out = BufWriter::new(File::create(&self.path)?);

        for record in cloud.iter() {
            writeln!(out, "{}", record)?;
        }

        out.flush()?;
        Ok(())
    }
}
