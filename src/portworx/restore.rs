use super::{
    objects::{build_pv, build_pvc, RestoreNames},
    Portworx,
};
use crate::{cluster::Cluster, driver::VolumeDriver, PwxError, Result};
use k8s_openapi::api::core::v1::{PersistentVolume, PersistentVolumeClaim};

#[derive(Debug, Clone, Default)]
pub struct RestoreRequest {
    /// Base name for the generated PV and PVC
    pub name: String,
    pub storage_class: String,
    pub snapshot_id: String,
    pub namespace: String,
    /// Delete the claim again when the volume cannot be created
    pub rollback: bool,
}

impl RestoreRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.storage_class.is_empty() {
            return Err(PwxError::InvalidArgument(
                "pvc/storageclass needs name".to_string(),
            ));
        }
        Ok(())
    }
}

/// Objects created by a successful restore
#[derive(Debug, Clone)]
pub struct RestoredClaim {
    pub volume_id: String,
    pub pvc: PersistentVolumeClaim,
    pub pv: PersistentVolume,
}

impl<C: Cluster, D: VolumeDriver> Portworx<C, D> {
    /// Clone a snapshot and expose it to the cluster as a PV/PVC pair.
    ///
    /// The claim is created before the volume. Without `rollback`, a failed
    /// volume creation leaves the claim in place.
    pub async fn create_pvc_from_snapshot(&self, request: &RestoreRequest) -> Result<RestoredClaim> {
        request.validate()?;

        tracing::info!(
            "Restoring snapshot {} as '{}' in namespace '{}'",
            request.snapshot_id,
            request.name,
            request.namespace
        );

        let (volume_id, snapshot) = self.clone_snapshot(&request.snapshot_id).await?;
        let size = snapshot.size();
        let names = RestoreNames::derive(&request.name);

        let pvc = build_pvc(&names, &request.storage_class, size);
        let pvc = self.cluster().create_pvc(&request.namespace, &pvc).await?;
        tracing::info!("Created PersistentVolumeClaim {}/{}", request.namespace, names.pvc);
        tracing::debug!("{:?}", pvc);

        let pv = build_pv(&names, &request.storage_class, &volume_id, size);
        let pv = match self.cluster().create_pv(&pv).await {
            Ok(pv) => pv,
            Err(err) => {
                if request.rollback {
                    self.rollback_claim(&request.namespace, &names.pvc).await;
                } else {
                    tracing::warn!(
                        "PersistentVolumeClaim {}/{} left without a volume",
                        request.namespace,
                        names.pvc
                    );
                }
                return Err(err);
            }
        };
        tracing::info!("Created PersistentVolume {}", names.pv);
        tracing::debug!("{:?}", pv);

        Ok(RestoredClaim { volume_id, pvc, pv })
    }

    async fn rollback_claim(&self, namespace: &str, name: &str) {
        tracing::info!("Rolling back PersistentVolumeClaim {}/{}", namespace, name);

        if let Err(e) = self.cluster().delete_pvc(namespace, name).await {
            tracing::warn!("Failed to delete PersistentVolumeClaim {}/{}: {}", namespace, name, e);
        }
    }
}
