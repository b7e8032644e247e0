use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub error_code: i64,
    pub error_msg: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    User,
    Group,
    Page,
    Application,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedObject {
    pub object_id: i64,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
}

impl ResolvedObject {
    /// Owner id as `photos.get` expects it: communities are negative.
    pub fn owner_id(&self) -> i64 {
        match self.object_type {
            ObjectType::Group | ObjectType::Page => -self.object_id.abs(),
            _ => self.object_id,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PhotoList {
    pub count: u64,
    pub items: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Photo {
    pub id: i64,
    pub owner_id: i64,
    pub date: i64,
    pub likes: Likes,
    pub sizes: Vec<PhotoSize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Likes {
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PhotoSize {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub size_type: String,
    pub url: String,
}
