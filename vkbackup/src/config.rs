use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_CREDENTIALS_FILE: &str = "tokens.env";

const VK_TOKEN: &str = "VK_TOKEN";
const VK_API_VERSION: &str = "VK_API_VERSION";
const YADISK_TOKEN: &str = "YADISK_TOKEN";
const GDRIVE_TOKEN: &str = "GDRIVE_TOKEN";
const VK_API_URL: &str = "VK_API_URL";
const YADISK_API_URL: &str = "YADISK_API_URL";
const GDRIVE_API_URL: &str = "GDRIVE_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("credentials file {0} does not exist")]
    MissingFile(PathBuf),
    #[error("credentials file is not well formed: {0}")]
    Parse(#[from] dotenvy::Error),
    #[error("{0} is not set in the credentials file or environment")]
    MissingKey(&'static str),
}

/// Tokens and endpoints for one run.
///
/// Values come from a dotenv-style credentials file; process environment
/// variables with the same names take precedence.
#[derive(Clone, Default)]
pub struct Credentials {
    pub vk_token: Option<String>,
    pub vk_api_version: Option<String>,
    pub yadisk_token: Option<String>,
    pub gdrive_token: Option<String>,
    pub vk_api_url: Option<String>,
    pub yadisk_api_url: Option<String>,
    pub gdrive_api_url: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("vk_token", &redacted(&self.vk_token))
            .field("vk_api_version", &self.vk_api_version)
            .field("yadisk_token", &redacted(&self.yadisk_token))
            .field("gdrive_token", &redacted(&self.gdrive_token))
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Loads `path` when given (it must exist), otherwise
    /// [`DEFAULT_CREDENTIALS_FILE`] if present, then applies environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file_values = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            Some(path) => read_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CREDENTIALS_FILE);
                if default.exists() {
                    read_file(default)?
                } else {
                    HashMap::new()
                }
            }
        };
        Ok(Self::from_sources(&file_values, |key| std::env::var(key).ok()))
    }

    fn from_sources<F>(file_values: &HashMap<String, String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            env(key)
                .or_else(|| file_values.get(key).cloned())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            vk_token: lookup(VK_TOKEN),
            vk_api_version: lookup(VK_API_VERSION),
            yadisk_token: lookup(YADISK_TOKEN),
            gdrive_token: lookup(GDRIVE_TOKEN),
            vk_api_url: lookup(VK_API_URL),
            yadisk_api_url: lookup(YADISK_API_URL),
            gdrive_api_url: lookup(GDRIVE_API_URL),
        }
    }

    pub fn vk_token(&self) -> Result<&str, ConfigError> {
        self.vk_token
            .as_deref()
            .ok_or(ConfigError::MissingKey(VK_TOKEN))
    }

    pub fn vk_api_version(&self) -> &str {
        self.vk_api_version
            .as_deref()
            .unwrap_or(vk_core::DEFAULT_API_VERSION)
    }

    pub fn yadisk_token(&self) -> Result<&str, ConfigError> {
        self.yadisk_token
            .as_deref()
            .ok_or(ConfigError::MissingKey(YADISK_TOKEN))
    }

    pub fn gdrive_token(&self) -> Result<&str, ConfigError> {
        self.gdrive_token
            .as_deref()
            .ok_or(ConfigError::MissingKey(GDRIVE_TOKEN))
    }
}

fn read_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let mut values = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        values.insert(key, value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_tokens_from_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tokens.env");
        std::fs::write(
            &file,
            "VK_TOKEN=vk-secret\nVK_API_VERSION=5.199\nYADISK_TOKEN=\"ya-secret\"\n# comment\n",
        )
        .unwrap();

        let values = read_file(&file).unwrap();
        let creds = Credentials::from_sources(&values, |_| None);

        assert_eq!(creds.vk_token().unwrap(), "vk-secret");
        assert_eq!(creds.vk_api_version(), "5.199");
        assert_eq!(creds.yadisk_token().unwrap(), "ya-secret");
        assert!(matches!(
            creds.gdrive_token(),
            Err(ConfigError::MissingKey("GDRIVE_TOKEN"))
        ));
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut values = HashMap::new();
        values.insert("VK_TOKEN".to_string(), "from-file".to_string());
        let creds = Credentials::from_sources(&values, |key| {
            (key == "VK_TOKEN").then(|| "from-env".to_string())
        });

        assert_eq!(creds.vk_token().unwrap(), "from-env");
    }

    #[test]
    fn api_version_defaults_when_missing() {
        let creds = Credentials::from_sources(&HashMap::new(), |_| None);
        assert_eq!(creds.vk_api_version(), "5.131");
        assert!(creds.vk_token().is_err());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut values = HashMap::new();
        values.insert("YADISK_TOKEN".to_string(), "   ".to_string());
        let creds = Credentials::from_sources(&values, |_| None);
        assert!(creds.yadisk_token().is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.env");
        let err = Credentials::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(path) if path == missing));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let creds = Credentials {
            vk_token: Some("super-secret".into()),
            ..Credentials::default()
        };
        let printed = format!("{creds:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
