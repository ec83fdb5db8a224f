//! Fetch stage: retrieve one video into the staging directory via yt-dlp.
//!
//! yt-dlp names the file itself; the stage returns the concrete path it
//! wrote so the transcoder never has to rediscover it by listing the
//! directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::{fs, process::Command};

/// Output template handed to yt-dlp, rooted in the staging directory.
const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Error from the fetch stage.
#[derive(Debug)]
pub enum FetchError {
    /// yt-dlp is not on PATH.
    ToolMissing,
    /// Creating the staging directory or spawning the subprocess failed.
    Io(std::io::Error),
    /// yt-dlp exited non-zero (network failure, invalid URL, no stream).
    Backend { status: ExitStatus, stderr: String },
    /// yt-dlp succeeded but printed no output path.
    NoOutputPath,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::ToolMissing => write!(f, "yt-dlp not found on PATH"),
            FetchError::Io(e) => write!(f, "{}", e),
            FetchError::Backend { status, stderr } => {
                write!(f, "yt-dlp exited with {}: {}", status, stderr.trim_end())
            }
            FetchError::NoOutputPath => write!(f, "yt-dlp reported no output file"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Retrieves remote media into the staging directory.
#[async_trait]
pub trait Fetcher {
    /// Downloads the media at `url` into `staging_dir` and returns the path
    /// of the file that was written.
    async fn fetch(&self, url: &str, staging_dir: &Path) -> Result<PathBuf, FetchError>;
}

/// Production fetcher driving the system's yt-dlp.
///
/// No format flag is passed, so stream selection is yt-dlp's own default,
/// not a best-quality guarantee.
pub struct YtDlpFetcher;

#[async_trait]
impl Fetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str, staging_dir: &Path) -> Result<PathBuf, FetchError> {
        which::which("yt-dlp").map_err(|_| FetchError::ToolMissing)?;

        fs::create_dir_all(staging_dir).await?;

        // --print after_move:filepath makes yt-dlp report the exact file it
        // wrote; --no-simulate keeps the download happening alongside it.
        let output = Command::new("yt-dlp")
            .arg("--no-playlist")
            .arg("--no-simulate")
            .arg("--print")
            .arg("after_move:filepath")
            .arg("-o")
            .arg(staging_dir.join(OUTPUT_TEMPLATE))
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            return Err(FetchError::Backend {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match printed_path(&stdout) {
            Some(p) => Ok(PathBuf::from(p)),
            None => Err(FetchError::NoOutputPath),
        }
    }
}

/// Last non-empty line of yt-dlp's stdout: the path printed by
/// `--print after_move:filepath`, skipping any noise before it.
fn printed_path(stdout: &str) -> Option<&str> {
    stdout.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn printed_path_takes_last_non_empty_line() {
        let out = "WARNING: unable to write cache\n/tmp/staging/clip.mp4\n\n";
        assert_eq!(printed_path(out), Some("/tmp/staging/clip.mp4"));
    }

    #[test]
    fn printed_path_empty_output() {
        assert_eq!(printed_path(""), None);
        assert_eq!(printed_path("\n   \n"), None);
    }

    #[test]
    fn backend_error_carries_stderr() {
        let err = FetchError::Backend {
            status: ExitStatus::from_raw(256),
            stderr: "ERROR: Unsupported URL: nope://x\n".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unsupported URL"));
        assert!(!msg.ends_with('\n'));
    }
}
