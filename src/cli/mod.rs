// CLI module - commands and argument parsing
pub mod restore;
pub mod snapshot;


use crate::config::DriverConfig;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pwxdemo")]
#[command(about = "Snapshot portworx volumes and restore them as Kubernetes PV/PVC pairs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Name of the volume driver service
    #[arg(long, global = true, default_value = crate::config::SERVICE_NAME)]
    pub service: String,

    /// Namespace of the volume driver service
    #[arg(long, global = true, default_value = crate::config::SERVICE_NAMESPACE)]
    pub service_namespace: String,

    /// REST port of the volume driver
    #[arg(long, global = true, default_value_t = crate::config::DRIVER_PORT)]
    pub port: u16,

    /// Bearer token for the volume driver API
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take a snapshot of a volume
    Snapshot {
        /// ID of the volume to snapshot
        #[arg(short = 'v', long = "volumeid")]
        volume_id: String,
    },

    /// Restore a volume
    Restore {
        /// Base name for the generated PV and PVC
        #[arg(short = 'n', long)]
        name: String,

        /// Storage class of the restored volume
        #[arg(short = 's', long = "storageclass")]
        storage_class: String,

        /// ID of the snapshot to restore
        #[arg(short = 'i', long = "snapshotid")]
        snapshot_id: String,

        /// Namespace for the PVC
        #[arg(short = 'm', long)]
        namespace: String,

        /// Delete the PVC again if the PV cannot be created
        #[arg(long)]
        rollback: bool,
    },
}

impl Cli {
    /// The full command tree
    pub fn command_tree() -> clap::Command {
        Self::command()
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            service_name: self.service.clone(),
            service_namespace: self.service_namespace.clone(),
            port: self.port,
            auth_token: self.token.clone(),
            ..Default::default()
        }
    }
}
