mod client;
mod types;

pub use client::{DEFAULT_API_VERSION, VkClient, VkError};
pub use types::{Likes, ObjectType, Photo, PhotoList, PhotoSize, ResolvedObject};
