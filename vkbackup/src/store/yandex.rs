use tracing::debug;
use yadisk_core::YadiskClient;

use super::{RemoteStore, StoreError};

/// Yandex Disk fetches the source URL itself, so uploads never pass photo
/// bytes through this process.
pub struct YandexDiskStore {
    client: YadiskClient,
}

impl YandexDiskStore {
    pub fn new(client: YadiskClient) -> Self {
        Self { client }
    }
}

impl RemoteStore for YandexDiskStore {
    async fn create_folder(&mut self, path: &str) -> Result<Option<String>, StoreError> {
        match self.client.create_folder(path).await {
            Ok(_) => Ok(None),
            Err(err) if err.is_conflict() => Err(StoreError::AlreadyExists(path.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    async fn upload_by_url(&mut self, path: &str, source_url: &str) -> Result<(), StoreError> {
        let operation = self.client.upload_from_url(path, source_url).await?;
        debug!(path, operation = %operation.href, "yandex disk accepted upload");
        Ok(())
    }
}
