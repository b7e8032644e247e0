use anyhow::Context;
use gdrive_core::DriveClient;
use vk_core::VkClient;
use yadisk_core::YadiskClient;

use crate::cli::{Backend, Cli};
use crate::config::Credentials;
use crate::model::{ManifestEntry, PhotoItem};
use crate::pipeline::{BackupPipeline, ManifestNaming, PipelineOptions};
use crate::progress::TerminalProgress;
use crate::source::AlbumSource;
use crate::store::{GoogleDriveStore, RemoteStore, YandexDiskStore};

/// Runs one backup end to end: resolve the owner, list the album, upload to
/// the chosen backend and write the manifest.
pub async fn run(cli: &Cli) -> anyhow::Result<Vec<ManifestEntry>> {
    let credentials = Credentials::load(cli.credentials.as_deref())
        .context("failed to load credentials")?;
    let owner = cli.owner()?;

    let vk = build_vk_client(&credentials)?;
    let items = AlbumSource::new(vk)
        .fetch(&owner, &cli.album_id)
        .await
        .context("failed to list VK photos")?;

    match cli.backend {
        Backend::YandexDisk => {
            let token = credentials.yadisk_token()?;
            let client = match credentials.yadisk_api_url.as_deref() {
                Some(url) => YadiskClient::with_base_url(url, token),
                None => YadiskClient::new(token),
            }
            .context("invalid Yandex Disk configuration")?;
            backup_into(cli, &items, YandexDiskStore::new(client)).await
        }
        Backend::GoogleDrive => {
            let token = credentials.gdrive_token()?;
            let client = match credentials.gdrive_api_url.as_deref() {
                Some(url) => DriveClient::with_base_url(url, token),
                None => DriveClient::new(token),
            }
            .context("invalid Google Drive configuration")?;
            backup_into(cli, &items, GoogleDriveStore::new(client)).await
        }
    }
}

fn build_vk_client(credentials: &Credentials) -> anyhow::Result<VkClient> {
    let token = credentials.vk_token()?;
    let version = credentials.vk_api_version();
    let client = match credentials.vk_api_url.as_deref() {
        Some(url) => VkClient::with_base_url(url, token, version),
        None => VkClient::new(token, version),
    };
    client.context("invalid VK configuration")
}

async fn backup_into<S: RemoteStore>(
    cli: &Cli,
    items: &[PhotoItem],
    mut store: S,
) -> anyhow::Result<Vec<ManifestEntry>> {
    let pipeline = BackupPipeline::new(PipelineOptions {
        limit: cli.count as usize,
        manifest_naming: if cli.record_uploaded_names {
            ManifestNaming::Uploaded
        } else {
            ManifestNaming::Base
        },
    });
    let mut progress = TerminalProgress::new(!cli.no_progress_bar);
    let manifest = pipeline
        .run_to_manifest(items, &cli.folder, &mut store, &mut progress, &cli.manifest)
        .await?;
    Ok(manifest)
}
