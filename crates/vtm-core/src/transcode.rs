//! Transcode stage: extract the audio track as MP3 via ffmpeg.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::{fs, process::Command};

use crate::naming;

/// Error from the transcode stage.
#[derive(Debug)]
pub enum TranscodeError {
    /// ffmpeg is not on PATH.
    ToolMissing,
    /// Input path has no file name component.
    NoFileName(PathBuf),
    /// Creating the output directory or spawning ffmpeg failed.
    Io(std::io::Error),
    /// ffmpeg exited non-zero (unreadable container, missing audio track).
    FfmpegFailed { status: ExitStatus, stderr: String },
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::ToolMissing => write!(f, "ffmpeg not found on PATH"),
            TranscodeError::NoFileName(p) => {
                write!(f, "input path has no file name: {}", p.display())
            }
            TranscodeError::Io(e) => write!(f, "{}", e),
            TranscodeError::FfmpegFailed { status, stderr } => {
                write!(f, "ffmpeg exited with {}: {}", status, stderr.trim_end())
            }
        }
    }
}

impl std::error::Error for TranscodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TranscodeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Converts a media container into an MP3 under the output directory.
#[async_trait]
pub trait Transcoder {
    /// Transcodes `input` and returns the path of the MP3 written.
    async fn transcode(&self, input: &Path, output_dir: &Path)
        -> Result<PathBuf, TranscodeError>;
}

/// Production transcoder driving the system's ffmpeg.
pub struct FfmpegTranscoder;

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf, TranscodeError> {
        which::which("ffmpeg").map_err(|_| TranscodeError::ToolMissing)?;

        let file_name = input
            .file_name()
            .ok_or_else(|| TranscodeError::NoFileName(input.to_path_buf()))?;
        let target = output_dir.join(naming::mp3_filename(&file_name.to_string_lossy()));

        // The output directory is persistent across runs; never cleared.
        fs::create_dir_all(output_dir).await?;

        // -vn drops the video stream; -y overwrites an MP3 left by an
        // earlier run that derived the same base name.
        let output = Command::new("ffmpeg")
            .args(["-y", "-i"])
            .arg(input)
            .arg("-vn")
            .arg(&target)
            .stdout(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            return Err(TranscodeError::FfmpegFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(target)
    }
}
