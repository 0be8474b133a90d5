use k8s_openapi::{
    api::core::v1::{
        PersistentVolume, PersistentVolumeClaim, PersistentVolumeClaimSpec,
        PersistentVolumeSpec, PortworxVolumeSource, VolumeResourceRequirements,
    },
    apimachinery::pkg::{api::resource::Quantity, apis::meta::v1::ObjectMeta},
};
use std::collections::BTreeMap;

const ACCESS_MODE: &str = "ReadWriteOnce";

/// Names of the objects a restore creates for a given base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreNames {
    pub pv: String,
    pub pvc: String,
}

impl RestoreNames {
    pub fn derive(name: &str) -> Self {
        Self {
            pv: format!("{}-pv", name),
            pvc: format!("{}-pvc", name),
        }
    }
}

fn storage(size_bytes: Option<u64>) -> Option<BTreeMap<String, Quantity>> {
    size_bytes.map(|size| BTreeMap::from([("storage".to_string(), Quantity(size.to_string()))]))
}

/// Claim bound statically to the volume named `names.pv`
pub fn build_pvc(
    names: &RestoreNames,
    storage_class: &str,
    size_bytes: Option<u64>,
) -> PersistentVolumeClaim {
    PersistentVolumeClaim {
        metadata: ObjectMeta {
            name: Some(names.pvc.clone()),
            ..Default::default()
        },
        spec: Some(PersistentVolumeClaimSpec {
            volume_name: Some(names.pv.clone()),
            storage_class_name: Some(storage_class.to_string()),
            access_modes: Some(vec![ACCESS_MODE.to_string()]),
            resources: storage(size_bytes).map(|requests| VolumeResourceRequirements {
                requests: Some(requests),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Volume backed by an existing portworx volume
pub fn build_pv(
    names: &RestoreNames,
    storage_class: &str,
    volume_id: &str,
    size_bytes: Option<u64>,
) -> PersistentVolume {
    PersistentVolume {
        metadata: ObjectMeta {
            name: Some(names.pv.clone()),
            ..Default::default()
        },
        spec: Some(PersistentVolumeSpec {
            storage_class_name: Some(storage_class.to_string()),
            access_modes: Some(vec![ACCESS_MODE.to_string()]),
            capacity: storage(size_bytes),
            portworx_volume: Some(PortworxVolumeSource {
                volume_id: volume_id.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}
