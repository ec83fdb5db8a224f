//! The one workflow vtm performs: stage, fetch, transcode, clean up.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::VtmConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::staging::Staging;
use crate::transcode::{TranscodeError, Transcoder};

/// Paths produced by a successful run.
#[derive(Debug)]
pub struct PipelineReport {
    /// File the fetcher wrote into the staging directory (gone after cleanup).
    pub media_path: PathBuf,
    /// MP3 written under the output directory.
    pub output_path: PathBuf,
}

/// Failure of a run, tagged with the phase that failed. The CLI maps any of
/// these to a non-zero exit status.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to prepare staging directory")]
    Staging(#[source] std::io::Error),
    #[error("download failed")]
    Fetch(#[source] FetchError),
    #[error("conversion failed")]
    Transcode(#[source] TranscodeError),
    #[error("failed to remove staging directory")]
    Cleanup(#[source] std::io::Error),
}

/// Runs the download → convert → cleanup sequence for one URL.
///
/// The staging directory is removed on every exit path: explicitly on
/// success (so a deletion failure is reported as [`PipelineError::Cleanup`]),
/// and via the [`Staging`] drop guard when a stage returns early.
pub async fn run<F, T>(
    url: &str,
    cfg: &VtmConfig,
    fetcher: &F,
    transcoder: &T,
) -> Result<PipelineReport, PipelineError>
where
    F: Fetcher + Sync,
    T: Transcoder + Sync,
{
    let staging = Staging::create(&cfg.temp_dir).map_err(PipelineError::Staging)?;

    let media_path = fetcher
        .fetch(url, staging.path())
        .await
        .map_err(PipelineError::Fetch)?;
    tracing::info!("downloaded {}", media_path.display());

    let output_path = transcoder
        .transcode(&media_path, &cfg.output_dir)
        .await
        .map_err(PipelineError::Transcode)?;
    tracing::info!("wrote {}", output_path.display());

    staging.close().map_err(PipelineError::Cleanup)?;

    Ok(PipelineReport {
        media_path,
        output_path,
    })
}
