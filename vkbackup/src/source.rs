use tracing::{debug, info};
use vk_core::VkClient;

use crate::error::BackupError;
use crate::model::PhotoItem;

pub const DEFAULT_ALBUM_ID: &str = "profile";

/// Whose album to back up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoOwner {
    Id(i64),
    ScreenName(String),
}

pub struct AlbumSource {
    client: VkClient,
}

impl AlbumSource {
    pub fn new(client: VkClient) -> Self {
        Self { client }
    }

    pub async fn resolve_owner(&self, owner: &PhotoOwner) -> Result<i64, BackupError> {
        match owner {
            PhotoOwner::Id(id) => Ok(*id),
            PhotoOwner::ScreenName(name) => {
                let resolved = self.client.resolve_screen_name(name).await?;
                debug!(screen_name = %name, owner_id = resolved.owner_id(), "resolved screen name");
                Ok(resolved.owner_id())
            }
        }
    }

    /// Fetches one album listing (no pagination) in API order.
    pub async fn fetch(
        &self,
        owner: &PhotoOwner,
        album_id: &str,
    ) -> Result<Vec<PhotoItem>, BackupError> {
        let owner_id = self.resolve_owner(owner).await?;
        let photos = self.client.get_photos(owner_id, album_id).await?;
        info!(
            owner_id,
            album_id,
            listed = photos.items.len(),
            total = photos.count,
            "fetched album listing"
        );
        Ok(photos.items.into_iter().map(PhotoItem::from).collect())
    }
}
