use std::path::{Path, PathBuf};

use crate::error::BackupError;
use crate::model::ManifestEntry;

pub const DEFAULT_MANIFEST_PATH: &str = "result.json";

/// Writes the run summary as a pretty-printed JSON array, replacing any
/// previous file. The data goes to a sibling `.partial` file first so a
/// failed write never leaves a truncated manifest behind.
pub async fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<(), BackupError> {
    let payload = serde_json::to_vec_pretty(entries)?;
    let partial = partial_path(path);
    let io_err = |source| BackupError::Manifest {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(&partial, payload).await.map_err(io_err)?;
    if let Err(source) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(io_err(source));
    }
    Ok(())
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    target.with_file_name(name)
}
