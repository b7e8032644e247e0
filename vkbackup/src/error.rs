use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("VK account {0:?} could not be resolved")]
    UnresolvableIdentifier(String),
    #[error("VK API error: {0}")]
    SourceApi(#[source] vk_core::VkError),
    #[error("photo #{index} has no size renditions")]
    EmptyRenditionSet { index: usize },
    #[error("remote store failed at {path}: {source}")]
    StoreFatal {
        path: String,
        #[source]
        source: StoreError,
    },
    #[error("failed to write manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode manifest: {0}")]
    ManifestEncode(#[from] serde_json::Error),
}

impl From<vk_core::VkError> for BackupError {
    fn from(err: vk_core::VkError) -> Self {
        match err {
            vk_core::VkError::UnknownScreenName(name) => BackupError::UnresolvableIdentifier(name),
            other => BackupError::SourceApi(other),
        }
    }
}
