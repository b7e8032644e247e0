use std::collections::HashMap;

use gdrive_core::DriveClient;
use tracing::debug;

use super::{RemoteStore, StoreError, split_remote_path};

const PHOTO_MIME_TYPE: &str = "image/jpeg";

/// Google Drive addresses folders by id, not path, so the store remembers
/// the id of every folder it created or found during the run. Photo bytes
/// are downloaded here and re-sent to Drive.
pub struct GoogleDriveStore {
    client: DriveClient,
    folders: HashMap<String, String>,
}

impl GoogleDriveStore {
    pub fn new(client: DriveClient) -> Self {
        Self {
            client,
            folders: HashMap::new(),
        }
    }

    pub fn folder_id(&self, path: &str) -> Option<&str> {
        self.folders.get(path).map(String::as_str)
    }
}

impl RemoteStore for GoogleDriveStore {
    async fn create_folder(&mut self, path: &str) -> Result<Option<String>, StoreError> {
        if self.folders.contains_key(path) {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        // Drive happily creates a second folder with the same name.
        if let Some(existing) = self.client.find_folder(path).await? {
            debug!(path, id = %existing.id, "reusing existing drive folder");
            self.folders.insert(path.to_string(), existing.id);
            return Err(StoreError::AlreadyExists(path.to_string()));
        }
        let created = self.client.create_folder(path).await?;
        debug!(path, id = %created.id, "created drive folder");
        self.folders.insert(path.to_string(), created.id.clone());
        Ok(Some(created.id))
    }

    async fn upload_by_url(&mut self, path: &str, source_url: &str) -> Result<(), StoreError> {
        let (folder, name) = split_remote_path(path);
        let parent_id = self
            .folders
            .get(folder)
            .ok_or_else(|| StoreError::UnknownFolder(folder.to_string()))?;
        let content = self.client.fetch_source(source_url).await?;
        let file = self
            .client
            .upload_bytes(name, parent_id, PHOTO_MIME_TYPE, content)
            .await?;
        debug!(path, id = %file.id, "uploaded to drive");
        Ok(())
    }
}
