//! Contains the colored point cloud along with the facilities that
//! build it from a textured scene.

mod builder;
mod conversion;

pub use self::builder::ConversionBuilder;
pub use self::conversion::Conversion;

use ::cgmath::Vector3;

use std::fmt;

/// A single point on the surface along with its texture color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointCloudRecord {
    pub position: Vector3<f64>,
    pub color: [u8; 3]
}

/// Formats the record as a line of an XYZRGB file, without newline.
impl fmt::Display for PointCloudRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Vector3 { x, y, z } = self.position;
        let [r, g, b] = self.color;
        write!(f, "{} {} {} {} {} {}", x, y, z, r, g, b)
    }
}

/// Records in the order they were sampled: entities, then faces,
/// then samples within each face.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    pub records: Vec<PointCloudRecord>
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointCloudRecord> {
        self.records.iter()
    }
}

impl Extend<PointCloudRecord> for PointCloud {
    fn extend<I : IntoIterator<Item = PointCloudRecord>>(&mut self, records: I) {
        self.records.extend(records)
    }
}
