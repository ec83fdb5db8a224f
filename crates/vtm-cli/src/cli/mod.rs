//! CLI for the VTM video-to-MP3 converter.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use vtm_core::config;
use vtm_core::fetch::YtDlpFetcher;
use vtm_core::pipeline;
use vtm_core::transcode::FfmpegTranscoder;

/// Top-level CLI: download one video and extract its audio track as MP3.
#[derive(Debug, Parser)]
#[command(name = "vtm")]
#[command(about = "VTM: download a video and extract its audio as MP3", long_about = None)]
pub struct Cli {
    /// URL of the video to download and convert.
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: String,

    /// Staging directory for the download (overrides the configured path).
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Directory the MP3 is written to (overrides the configured path).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Loads the config, applies flag overrides, and runs the pipeline.
pub async fn run(args: Cli) -> Result<()> {
    let mut cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    if let Some(dir) = args.temp_dir {
        cfg.temp_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir;
    }

    let report = pipeline::run(&args.url, &cfg, &YtDlpFetcher, &FfmpegTranscoder).await?;
    println!("Wrote {}", report.output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests;
