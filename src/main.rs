use anyhow::Result;
use clap::Parser;
use pwxdemo::{
    cli::{Cli, Commands},
    cluster::KubeCluster,
    portworx::{Portworx, RestoreRequest},
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.driver_config();

    // Initialize components
    let cluster = KubeCluster::in_cluster()?;
    let pwx = Portworx::connect(cluster, config).await?;

    // Execute command
    match cli.command {
        Commands::Snapshot { volume_id } => {
            pwxdemo::cli::snapshot::execute(&volume_id, &pwx).await?;
        }
        Commands::Restore {
            name,
            storage_class,
            snapshot_id,
            namespace,
            rollback,
        } => {
            let request = RestoreRequest {
                name,
                storage_class,
                snapshot_id,
                namespace,
                rollback,
            };
            pwxdemo::cli::restore::execute(&request, &pwx).await?;
        }
    }

    Ok(())
}
