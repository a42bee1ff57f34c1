
use crate::cloud::PointCloud;
use crate::error::Result;

pub mod obj;
pub mod xyz;

pub use self::obj::ObjSink;
pub use self::xyz::XyzSink;

/// Serializes a finished point cloud somewhere.
pub trait PointCloudSink {
    fn serialize(&self, cloud: &PointCloud) -> Result<()>;
}
