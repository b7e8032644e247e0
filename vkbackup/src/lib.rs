pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod limiter;
pub mod manifest;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod progress;
pub mod select;
pub mod source;
pub mod store;

pub use error::BackupError;
pub use model::{ManifestEntry, PhotoItem, Rendition};
pub use pipeline::{BackupPipeline, ManifestNaming, PipelineOptions};
