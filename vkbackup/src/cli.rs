use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::source::{DEFAULT_ALBUM_ID, PhotoOwner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupMethod {
    /// Identifier is a numeric owner id
    ById,
    /// Identifier is a screen name (the part after vk.com/)
    ByScreenName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    YandexDisk,
    GoogleDrive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "vk-photo-backup",
    version,
    allow_negative_numbers = true,
    about = "Back up photos from a VK album to Yandex Disk or Google Drive"
)]
pub struct Cli {
    /// How to interpret the identifier
    #[arg(value_enum)]
    pub method: LookupMethod,

    /// Owner id or screen name
    #[arg(allow_hyphen_values = true)]
    pub identifier: String,

    /// Where to save the photos
    #[arg(value_enum)]
    pub backend: Backend,

    /// Folder on the cloud drive to save photos into
    pub folder: String,

    /// VK album id (profile, wall, saved or a numeric id)
    #[arg(long, default_value = DEFAULT_ALBUM_ID)]
    pub album_id: String,

    /// Maximum number of photos to save
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Credentials file with VK_TOKEN, YADISK_TOKEN, GDRIVE_TOKEN
    #[arg(short = 'c', long, env = "VK_BACKUP_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Where to write the JSON summary
    #[arg(short = 'o', long, default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Record collision-renamed files under their stored name in the summary
    #[arg(long)]
    pub record_uploaded_names: bool,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress_bar: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn owner(&self) -> anyhow::Result<PhotoOwner> {
        match self.method {
            LookupMethod::ById => {
                let id = self.identifier.trim().parse::<i64>().map_err(|_| {
                    anyhow::anyhow!("owner id must be an integer, got {:?}", self.identifier)
                })?;
                Ok(PhotoOwner::Id(id))
            }
            LookupMethod::ByScreenName => Ok(PhotoOwner::ScreenName(self.identifier.clone())),
        }
    }
}
