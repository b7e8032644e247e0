use std::path::Path;

use tracing::{debug, info};

use crate::error::BackupError;
use crate::limiter::TransferLimiter;
use crate::manifest::write_manifest;
use crate::model::{ManifestEntry, PhotoItem};
use crate::naming::NameDisambiguator;
use crate::progress::ProgressSink;
use crate::select::select_best;
use crate::store::{RemoteStore, StoreError};

pub const DEFAULT_PHOTO_LIMIT: usize = 5;

/// Which name a manifest entry records when an upload was renamed to avoid
/// a collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManifestNaming {
    /// `{likes}.jpg`, even when the file was stored as `{likes}-{date}.jpg`.
    #[default]
    Base,
    /// The name the file was actually stored under.
    Uploaded,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub limit: usize,
    pub manifest_naming: ManifestNaming,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PHOTO_LIMIT,
            manifest_naming: ManifestNaming::default(),
        }
    }
}

pub struct BackupPipeline {
    options: PipelineOptions,
}

impl BackupPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Uploads the largest rendition of up to `limit` items into
    /// `target_folder` and returns one manifest entry per uploaded item, in
    /// source order. The first failing store call aborts the run.
    pub async fn run<S, P>(
        &self,
        items: &[PhotoItem],
        target_folder: &str,
        store: &mut S,
        progress: &mut P,
    ) -> Result<Vec<ManifestEntry>, BackupError>
    where
        S: RemoteStore,
        P: ProgressSink,
    {
        let limiter = TransferLimiter::new(self.options.limit);
        let total = limiter.effective_count(items.len());
        let mut names = NameDisambiguator::new();
        let mut manifest = Vec::with_capacity(total);

        // Stores key folders by the exact path, so create and upload must agree.
        let folder = target_folder.trim_end_matches('/');
        ensure_folder(store, folder).await?;
        info!(
            folder,
            available = items.len(),
            transferring = total,
            "starting backup"
        );
        if total == 0 {
            return Ok(manifest);
        }

        for (index, item) in items.iter().enumerate() {
            let processed = index + 1;
            let rendition = select_best(&item.renditions)
                .map_err(|_| BackupError::EmptyRenditionSet { index: processed })?;
            let base_name = item.base_name();
            let name = names.assign(&base_name, item.upload_date);
            let path = format!("{folder}/{name}");

            manifest.push(ManifestEntry {
                file_name: match self.options.manifest_naming {
                    ManifestNaming::Base => base_name,
                    ManifestNaming::Uploaded => name,
                },
                size_tag: rendition.size_tag.clone(),
            });

            debug!(%path, size = %rendition.size_tag, "uploading photo");
            let uploaded = store.upload_by_url(&path, &rendition.url).await;
            uploaded.map_err(|source| BackupError::StoreFatal { path, source })?;

            progress.report(processed, total);
            if limiter.should_stop(processed) {
                break;
            }
        }

        info!(uploaded = manifest.len(), "backup finished");
        Ok(manifest)
    }

    /// [`run`](Self::run), then write the manifest to `manifest_path`.
    /// Nothing is written when the run fails.
    pub async fn run_to_manifest<S, P>(
        &self,
        items: &[PhotoItem],
        target_folder: &str,
        store: &mut S,
        progress: &mut P,
        manifest_path: &Path,
    ) -> Result<Vec<ManifestEntry>, BackupError>
    where
        S: RemoteStore,
        P: ProgressSink,
    {
        let manifest = self.run(items, target_folder, store, progress).await?;
        write_manifest(manifest_path, &manifest).await?;
        info!(path = %manifest_path.display(), "manifest written");
        Ok(manifest)
    }
}

/// An already existing folder counts as success.
async fn ensure_folder<S: RemoteStore>(store: &mut S, path: &str) -> Result<(), BackupError> {
    match store.create_folder(path).await {
        Ok(_) => Ok(()),
        Err(StoreError::AlreadyExists(_)) => {
            debug!(folder = path, "target folder already exists");
            Ok(())
        }
        Err(source) => Err(BackupError::StoreFatal {
            path: path.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
