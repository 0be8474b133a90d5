// In-memory fakes of the cluster and volume driver used by unit tests
use crate::{
    cluster::Cluster,
    driver::{SnapCreateRequest, Volume, VolumeDriver, VolumeLocator},
    PwxError, Result,
};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{
    PersistentVolume, PersistentVolumeClaim, Service, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::ErrorResponse;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum ClusterCall {
    GetService { namespace: String, name: String },
    CreatePvc { namespace: String, name: String },
    CreatePv { name: String },
    DeletePvc { namespace: String, name: String },
}

fn conflict(message: &str) -> PwxError {
    PwxError::Kube(kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: message.to_string(),
        reason: "AlreadyExists".to_string(),
        code: 409,
    }))
}

pub fn service(namespace: &str, name: &str, cluster_ip: Option<&str>) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            cluster_ip: cluster_ip.map(str::to_string),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct FakeCluster {
    services: HashMap<(String, String), Service>,
    fail_pvc: bool,
    fail_pv: bool,
    fail_delete: bool,
    calls: Mutex<Vec<ClusterCall>>,
    pvcs: Mutex<Vec<PersistentVolumeClaim>>,
    pvs: Mutex<Vec<PersistentVolume>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        let key = (
            service.metadata.namespace.clone().unwrap_or_default(),
            service.metadata.name.clone().unwrap_or_default(),
        );
        self.services.insert(key, service);
        self
    }

    pub fn failing_pvc(mut self) -> Self {
        self.fail_pvc = true;
        self
    }

    pub fn failing_pv(mut self) -> Self {
        self.fail_pv = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn calls(&self) -> Vec<ClusterCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pvcs(&self) -> Vec<PersistentVolumeClaim> {
        self.pvcs.lock().unwrap().clone()
    }

    pub fn pvs(&self) -> Vec<PersistentVolume> {
        self.pvs.lock().unwrap().clone()
    }

    fn record(&self, call: ClusterCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Cluster for FakeCluster {
    async fn get_service(&self, namespace: &str, name: &str) -> Result<Option<Service>> {
        self.record(ClusterCall::GetService {
            namespace: namespace.to_string(),
            name: name.to_string(),
        });
        Ok(self
            .services
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }

    async fn create_pvc(
        &self,
        namespace: &str,
        pvc: &PersistentVolumeClaim,
    ) -> Result<PersistentVolumeClaim> {
        let name = pvc.metadata.name.clone().unwrap_or_default();
        self.record(ClusterCall::CreatePvc {
            namespace: namespace.to_string(),
            name: name.clone(),
        });

        if self.fail_pvc {
            return Err(conflict(&format!("persistentvolumeclaims \"{}\" already exists", name)));
        }

        let mut created = pvc.clone();
        created.metadata.namespace = Some(namespace.to_string());
        self.pvcs.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn create_pv(&self, pv: &PersistentVolume) -> Result<PersistentVolume> {
        let name = pv.metadata.name.clone().unwrap_or_default();
        self.record(ClusterCall::CreatePv { name: name.clone() });

        if self.fail_pv {
            return Err(conflict(&format!("persistentvolumes \"{}\" already exists", name)));
        }

        self.pvs.lock().unwrap().push(pv.clone());
        Ok(pv.clone())
    }

    async fn delete_pvc(&self, namespace: &str, name: &str) -> Result<()> {
        self.record(ClusterCall::DeletePvc {
            namespace: namespace.to_string(),
            name: name.to_string(),
        });

        if self.fail_delete {
            return Err(PwxError::InvalidArgument(format!("cannot delete {}", name)));
        }

        self.pvcs
            .lock()
            .unwrap()
            .retain(|pvc| pvc.metadata.name.as_deref() != Some(name));
        Ok(())
    }
}

pub fn volume(id: &str, locator: VolumeLocator, size: u64) -> Volume {
    Volume {
        id: id.to_string(),
        locator,
        spec: Some(crate::driver::api::VolumeSpec { size }),
    }
}

#[derive(Default)]
pub struct FakeDriver {
    volumes: HashMap<String, Volume>,
    next_id: Mutex<u64>,
    fail_snapshot: Option<String>,
    snapshots: Mutex<Vec<SnapCreateRequest>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1000),
            ..Default::default()
        }
    }

    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volumes.insert(volume.id.clone(), volume);
        self
    }

    pub fn failing_snapshot(mut self, message: &str) -> Self {
        self.fail_snapshot = Some(message.to_string());
        self
    }

    pub fn snapshot_requests(&self) -> Vec<SnapCreateRequest> {
        self.snapshots.lock().unwrap().clone()
    }
}

#[async_trait]
impl VolumeDriver for FakeDriver {
    async fn inspect(&self, ids: &[String]) -> Result<Vec<Volume>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.volumes.get(id).cloned())
            .collect())
    }

    async fn snapshot(&self, request: &SnapCreateRequest) -> Result<String> {
        self.snapshots.lock().unwrap().push(request.clone());

        if let Some(message) = &self.fail_snapshot {
            return Err(PwxError::Driver(message.clone()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        Ok(next_id.to_string())
    }
}
