use super::Cluster;
use crate::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{PersistentVolume, PersistentVolumeClaim, Service};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, Config,
};

/// Cluster access through the Kubernetes API server
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connect using the service account credentials mounted into the pod.
    /// Fails outside a cluster.
    pub fn in_cluster() -> Result<Self> {
        let config = Config::incluster()?;
        let client = Client::try_from(config)?;

        tracing::debug!("Using in-cluster Kubernetes credentials");

        Ok(Self::new(client))
    }
}

#[async_trait]
impl Cluster for KubeCluster {
    async fn get_service(&self, namespace: &str, name: &str) -> Result<Option<Service>> {
        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        Ok(services.get_opt(name).await?)
    }

    async fn create_pvc(
        &self,
        namespace: &str,
        pvc: &PersistentVolumeClaim,
    ) -> Result<PersistentVolumeClaim> {
        let claims: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), namespace);
        Ok(claims.create(&PostParams::default(), pvc).await?)
    }

    async fn create_pv(&self, pv: &PersistentVolume) -> Result<PersistentVolume> {
        let volumes: Api<PersistentVolume> = Api::all(self.client.clone());
        Ok(volumes.create(&PostParams::default(), pv).await?)
    }

    async fn delete_pvc(&self, namespace: &str, name: &str) -> Result<()> {
        let claims: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), namespace);
        claims.delete(name, &DeleteParams::default()).await?;
        Ok(())
    }
}
