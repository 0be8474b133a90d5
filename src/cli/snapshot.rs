use crate::{cluster::Cluster, driver::VolumeDriver, portworx::Portworx};
use anyhow::Result;

pub async fn execute<C: Cluster, D: VolumeDriver>(
    volume_id: &str,
    pwx: &Portworx<C, D>,
) -> Result<()> {
    let snapshot_id = pwx.create_snapshot(volume_id).await?;

    println!("Created Snapshot - [{}]", snapshot_id);

    Ok(())
}
