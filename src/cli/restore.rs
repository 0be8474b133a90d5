use crate::{
    cluster::Cluster,
    driver::VolumeDriver,
    portworx::{Portworx, RestoreRequest},
};
use anyhow::Result;

pub async fn execute<C: Cluster, D: VolumeDriver>(
    request: &RestoreRequest,
    pwx: &Portworx<C, D>,
) -> Result<()> {
    let restored = pwx.create_pvc_from_snapshot(request).await?;

    tracing::info!(
        "Restored snapshot {} into volume {} ({} / {})",
        request.snapshot_id,
        restored.volume_id,
        restored.pvc.metadata.name.as_deref().unwrap_or_default(),
        restored.pv.metadata.name.as_deref().unwrap_or_default()
    );

    println!("Restore succeeded");

    Ok(())
}
