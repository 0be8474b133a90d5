// Volume driver module - openstorage REST API
pub mod api;
pub mod client;

pub use api::{SnapCreateRequest, Volume, VolumeLocator};
pub use client::OsdClient;

use crate::Result;
use async_trait::async_trait;

/// Operations used against the remote volume driver
#[async_trait]
pub trait VolumeDriver: Send + Sync {
    /// Inspect volumes (or snapshots) by id. Unknown ids are simply absent
    /// from the result.
    async fn inspect(&self, ids: &[String]) -> Result<Vec<Volume>>;

    /// Snapshot a volume. A read-only request produces a snapshot, a writable
    /// one a full clone. Returns the id of the created volume.
    async fn snapshot(&self, request: &SnapCreateRequest) -> Result<String>;
}
