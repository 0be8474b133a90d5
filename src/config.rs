/// Kubernetes service fronting the portworx daemon set
pub const SERVICE_NAME: &str = "portworx-service";

/// Namespace the portworx daemon set runs in
pub const SERVICE_NAMESPACE: &str = "kube-system";

/// REST port of the volume driver
pub const DRIVER_PORT: u16 = 9001;

pub const DRIVER_NAME: &str = "pxd";
pub const API_VERSION: &str = "v1";
pub const USER_AGENT: &str = "stork";

/// Prefix prepended to the source volume name when naming snapshots
pub const SNAPSHOT_PREFIX: &str = "pwxdemo_";

/// Prefix of the volume name a restore produces; must differ from the
/// source volume name
pub const RESTORE_PREFIX: &str = "pwxdemo_restore_";

/// Snapshot label carrying the name of the volume a restore should produce
pub const PV_NAME_LABEL: &str = "pvName";

#[derive(Debug, Clone)]
pub struct DriverConfig {
    // Discovery
    pub service_name: String,
    pub service_namespace: String,
    pub port: u16,

    // Client parameters
    pub driver_name: String,
    pub api_version: String,
    pub user_agent: String,
    pub auth_token: Option<String>,

    // Naming
    pub snapshot_prefix: String,
    pub restore_prefix: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            service_namespace: SERVICE_NAMESPACE.to_string(),
            port: DRIVER_PORT,
            driver_name: DRIVER_NAME.to_string(),
            api_version: API_VERSION.to_string(),
            user_agent: USER_AGENT.to_string(),
            auth_token: None,
            snapshot_prefix: SNAPSHOT_PREFIX.to_string(),
            restore_prefix: RESTORE_PREFIX.to_string(),
        }
    }
}

impl DriverConfig {
    /// Base URL of the driver REST API for a discovered cluster address
    pub fn base_url(&self, endpoint: &str) -> String {
        // Bare IPv6 addresses need brackets in a URL authority
        let host = if endpoint.contains(':') && !endpoint.starts_with('[') {
            format!("[{}]", endpoint)
        } else {
            endpoint.to_string()
        };

        format!("http://{}:{}/{}", host, self.port, self.api_version)
    }
}
