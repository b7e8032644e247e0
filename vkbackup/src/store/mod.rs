mod google_drive;
mod yandex;

use thiserror::Error;

pub use google_drive::GoogleDriveStore;
pub use yandex::YandexDiskStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("folder {0} has not been created in this run")]
    UnknownFolder(String),
    #[error("yandex disk: {0}")]
    Yandex(#[from] yadisk_core::YadiskError),
    #[error("google drive: {0}")]
    Drive(#[from] gdrive_core::DriveError),
}

/// Folder-create and upload-by-url over a cloud drive.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Returns the backend's folder id when it has one. An existing folder
    /// is reported as [`StoreError::AlreadyExists`].
    async fn create_folder(&mut self, path: &str) -> Result<Option<String>, StoreError>;

    /// Stores the bytes behind `source_url` at `path` (`folder/name`).
    async fn upload_by_url(&mut self, path: &str, source_url: &str) -> Result<(), StoreError>;
}

/// Splits `folder/name` at the last slash.
pub(crate) fn split_remote_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((folder, name)) => (folder, name),
        None => ("", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_last_separator() {
        assert_eq!(split_remote_path("Backups/VK/10.jpg"), ("Backups/VK", "10.jpg"));
        assert_eq!(split_remote_path("10.jpg"), ("", "10.jpg"));
    }
}
