use thiserror::Error;

#[derive(Error, Debug)]
pub enum PwxError {
    #[error("Failed to load in-cluster configuration: {0}")]
    InClusterConfig(#[from] kube::config::InClusterError),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to get k8s service spec: service {namespace}/{name} not found")]
    ServiceNotFound { namespace: String, name: String },

    #[error("Failed to get endpoint for portworx volume driver from service {0}")]
    MissingEndpoint(String),

    #[error("Invalid volume driver endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Driver(String),

    #[error("Volume {0} not found")]
    VolumeNotFound(String),

    #[error("Snapshot {0} not found")]
    SnapshotNotFound(String),

    #[error("Snapshot {snapshot} has no '{label}' label")]
    MissingLabel { snapshot: String, label: String },

    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PwxError>;
