use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameter used by the volume inspect endpoint
pub const OPT_VOLUME_ID: &str = "VolumeID";

pub const VOLUME_PATH: &str = "osd-volumes";
pub const SNAPSHOT_PATH: &str = "osd-snapshot";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeLocator {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub volume_labels: BTreeMap<String, String>,
}

impl VolumeLocator {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            volume_labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.volume_labels.insert(key.into(), value.into());
        self
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.volume_labels.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeSpec {
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub locator: VolumeLocator,
    #[serde(default)]
    pub spec: Option<VolumeSpec>,
}

impl Volume {
    /// Provisioned size in bytes, if the driver reported one
    pub fn size(&self) -> Option<u64> {
        self.spec.as_ref().map(|s| s.size).filter(|size| *size > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapCreateRequest {
    pub id: String,
    pub locator: VolumeLocator,
    pub readonly: bool,
    pub no_retry: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeResponse {
    #[serde(default)]
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeCreateResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub volume_response: Option<VolumeResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapCreateResponse {
    #[serde(default)]
    pub volume_create_response: Option<VolumeCreateResponse>,
}

impl SnapCreateResponse {
    /// Extract the created id, surfacing an error embedded in the response body
    pub fn into_id(self) -> crate::Result<String> {
        let Some(created) = self.volume_create_response else {
            return Ok(String::new());
        };

        if let Some(response) = &created.volume_response {
            if !response.error.is_empty() {
                return Err(crate::PwxError::Driver(response.error.clone()));
            }
        }

        Ok(created.id)
    }
}
