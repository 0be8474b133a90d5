// Cluster orchestrator module - Kubernetes objects used by restore
pub mod k8s;

pub use k8s::KubeCluster;

use crate::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{PersistentVolume, PersistentVolumeClaim, Service};

/// Kubernetes API surface needed for endpoint discovery and restore
#[async_trait]
pub trait Cluster: Send + Sync {
    /// Fetch a service, `None` if it does not exist
    async fn get_service(&self, namespace: &str, name: &str) -> Result<Option<Service>>;

    async fn create_pvc(
        &self,
        namespace: &str,
        pvc: &PersistentVolumeClaim,
    ) -> Result<PersistentVolumeClaim>;

    /// Persistent volumes are cluster scoped
    async fn create_pv(&self, pv: &PersistentVolume) -> Result<PersistentVolume>;

    async fn delete_pvc(&self, namespace: &str, name: &str) -> Result<()>;
}
