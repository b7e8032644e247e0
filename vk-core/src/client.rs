use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::types::{ApiError, PhotoList, ResolvedObject};

const DEFAULT_BASE_URL: &str = "https://api.vk.com/method/";
pub const DEFAULT_API_VERSION: &str = "5.131";

#[derive(Debug, Error)]
pub enum VkError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("VK API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("screen name {0:?} does not resolve to an account")]
    UnknownScreenName(String),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct VkClient {
    http: Client,
    base_url: Url,
    token: String,
    api_version: String,
}

impl VkClient {
    pub fn new(token: impl Into<String>, api_version: impl Into<String>) -> Result<Self, VkError> {
        Self::with_base_url(DEFAULT_BASE_URL, token, api_version)
    }

    pub fn with_base_url(
        base_url: &str,
        token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, VkError> {
        // Method names are joined onto the base, so it must end with a slash.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self {
            http: Client::new(),
            base_url,
            token: token.into(),
            api_version: api_version.into(),
        })
    }

    /// Maps a screen name (`durov`, `club1`) to the account it names.
    pub async fn resolve_screen_name(&self, screen_name: &str) -> Result<ResolvedObject, VkError> {
        let response = self
            .call("utils.resolveScreenName", &[("screen_name", screen_name)])
            .await?;
        // Unknown names come back as an empty list instead of an object.
        if response.get("object_id").is_none() {
            return Err(VkError::UnknownScreenName(screen_name.to_string()));
        }
        Ok(serde_json::from_value(response)?)
    }

    /// Lists the photos of one album with like counts (`extended=1`).
    pub async fn get_photos(&self, owner_id: i64, album_id: &str) -> Result<PhotoList, VkError> {
        let owner_id = owner_id.to_string();
        self.call_typed(
            "photos.get",
            &[
                ("owner_id", owner_id.as_str()),
                ("album_id", album_id),
                ("extended", "1"),
            ],
        )
        .await
    }

    async fn call_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<T, VkError> {
        let response = self.call(method, params).await?;
        Ok(serde_json::from_value(response)?)
    }

    async fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<Value, VkError> {
        let mut url = self.base_url.join(method)?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("access_token", &self.token);
            query.append_pair("v", &self.api_version);
        }
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VkError::Http { status, body });
        }
        let mut payload: Value = response.json().await?;
        if let Some(error) = payload.get_mut("error").map(Value::take) {
            let error: ApiError = serde_json::from_value(error)?;
            return Err(VkError::Api {
                code: error.error_code,
                message: error.error_msg,
            });
        }
        match payload.get_mut("response").map(Value::take) {
            Some(response) => Ok(response),
            None => Err(VkError::Malformed(
                <serde_json::Error as serde::de::Error>::missing_field("response"),
            )),
        }
    }
}
