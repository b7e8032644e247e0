use serde::{Deserialize, Serialize};

/// One available resolution of a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendition {
    pub width: u32,
    pub height: u32,
    pub size_tag: String,
    pub url: String,
}

impl Rendition {
    pub fn score(&self) -> u64 {
        u64::from(self.width) + u64::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoItem {
    pub like_count: u64,
    /// Upload time, epoch seconds.
    pub upload_date: i64,
    pub renditions: Vec<Rendition>,
}

impl PhotoItem {
    pub fn base_name(&self) -> String {
        format!("{}.jpg", self.like_count)
    }
}

impl From<vk_core::Photo> for PhotoItem {
    fn from(photo: vk_core::Photo) -> Self {
        Self {
            like_count: photo.likes.count,
            upload_date: photo.date,
            renditions: photo
                .sizes
                .into_iter()
                .map(|size| Rendition {
                    width: size.width,
                    height: size.height,
                    size_tag: size.size_type,
                    url: size.url,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub file_name: String,
    #[serde(rename = "size")]
    pub size_tag: String,
}
