// Snapshot and restore operations against portworx
pub mod objects;
pub mod restore;


pub use objects::RestoreNames;
pub use restore::{RestoreRequest, RestoredClaim};

use crate::{
    cluster::Cluster,
    config::{DriverConfig, PV_NAME_LABEL},
    driver::{OsdClient, SnapCreateRequest, Volume, VolumeDriver, VolumeLocator},
    PwxError, Result,
};

/// Resolve the cluster address of the volume driver service
pub async fn discover_endpoint<C: Cluster>(cluster: &C, config: &DriverConfig) -> Result<String> {
    let service = cluster
        .get_service(&config.service_namespace, &config.service_name)
        .await?
        .ok_or_else(|| PwxError::ServiceNotFound {
            namespace: config.service_namespace.clone(),
            name: config.service_name.clone(),
        })?;

    let cluster_ip = service
        .spec
        .and_then(|spec| spec.cluster_ip)
        .unwrap_or_default();

    // "None" marks a headless service
    if cluster_ip.is_empty() || cluster_ip == "None" {
        return Err(PwxError::MissingEndpoint(format!(
            "{}/{}",
            config.service_namespace, config.service_name
        )));
    }

    tracing::debug!("Discovered volume driver endpoint: {}", cluster_ip);

    Ok(cluster_ip)
}

/// Snapshot/restore workflow bound to one cluster and one volume driver
pub struct Portworx<C, D> {
    cluster: C,
    driver: D,
    config: DriverConfig,
}

impl<C: Cluster> Portworx<C, OsdClient> {
    /// Discover the driver service and build an HTTP client for it
    pub async fn connect(cluster: C, config: DriverConfig) -> Result<Self> {
        let endpoint = discover_endpoint(&cluster, &config).await?;
        let driver = OsdClient::new(&config, &endpoint)?;

        tracing::info!("Using volume driver '{}' at {}", driver.driver_name(), driver.base_url());

        Ok(Self::new(cluster, driver, config))
    }
}

impl<C: Cluster, D: VolumeDriver> Portworx<C, D> {
    pub fn new(cluster: C, driver: D, config: DriverConfig) -> Self {
        Self {
            cluster,
            driver,
            config,
        }
    }

    pub fn cluster(&self) -> &C {
        &self.cluster
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// First inspect result for `id`, `None` if the driver does not know it
    async fn inspect_one(&self, id: &str) -> Result<Option<Volume>> {
        let volumes = self.driver.inspect(&[id.to_string()]).await?;
        Ok(volumes.into_iter().next())
    }

    async fn request_snapshot(&self, request: SnapCreateRequest) -> Result<String> {
        let id = self.driver.snapshot(&request).await?;
        if id.is_empty() {
            return Err(PwxError::Driver(format!(
                "no id returned for snapshot of {}",
                request.id
            )));
        }
        Ok(id)
    }

    /// Take a read-only snapshot of an existing volume
    pub async fn create_snapshot(&self, volume_id: &str) -> Result<String> {
        tracing::info!("Creating snapshot of volume: {}", volume_id);

        let volume = self
            .inspect_one(volume_id)
            .await?
            .ok_or_else(|| PwxError::VolumeNotFound(volume_id.to_string()))?;

        let source_name = &volume.locator.name;
        let locator = VolumeLocator::named(format!("{}{}", self.config.snapshot_prefix, source_name))
            .with_label(
                PV_NAME_LABEL,
                format!("{}{}", self.config.restore_prefix, source_name),
            );

        tracing::debug!("Snapshot locator: {:?}", locator);

        let snapshot_id = self
            .request_snapshot(SnapCreateRequest {
                id: volume_id.to_string(),
                locator,
                readonly: true,
                no_retry: true,
            })
            .await?;

        tracing::info!("Created snapshot {} of volume {}", snapshot_id, volume_id);

        Ok(snapshot_id)
    }

    /// Clone a snapshot into a new writable volume, returning the new
    /// volume and the inspected snapshot
    async fn clone_snapshot(&self, snapshot_id: &str) -> Result<(String, Volume)> {
        let snapshot = self
            .inspect_one(snapshot_id)
            .await?
            .ok_or_else(|| PwxError::SnapshotNotFound(snapshot_id.to_string()))?;

        let pv_name = snapshot
            .locator
            .label(PV_NAME_LABEL)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PwxError::MissingLabel {
                snapshot: snapshot_id.to_string(),
                label: PV_NAME_LABEL.to_string(),
            })?;

        let volume_id = self
            .request_snapshot(SnapCreateRequest {
                id: snapshot_id.to_string(),
                locator: VolumeLocator::named(pv_name),
                readonly: false,
                no_retry: true,
            })
            .await?;

        tracing::info!("Created volume {} from snapshot {}", volume_id, snapshot_id);

        Ok((volume_id, snapshot))
    }

    /// Create a writable volume from a snapshot
    pub async fn create_volume_from_snapshot(&self, snapshot_id: &str) -> Result<String> {
        let (volume_id, _) = self.clone_snapshot(snapshot_id).await?;
        Ok(volume_id)
    }
}
