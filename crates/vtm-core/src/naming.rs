//! Output filename derivation.
//!
//! The MP3 keeps the downloaded file's base name: everything before the
//! first `.` in the filename. A name like `archive.tar.gz` therefore
//! yields `archive.mp3`; that truncation is long-standing behavior and is
//! kept as-is.

/// Fallback base when truncation leaves nothing usable (e.g. dotfiles).
const DEFAULT_BASENAME: &str = "audio";

/// Derives the MP3 filename for a downloaded media file.
pub fn mp3_filename(media_filename: &str) -> String {
    let base = media_filename.split('.').next().unwrap_or("");
    let base = if base.is_empty() { DEFAULT_BASENAME } else { base };
    format!("{base}.mp3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp3_filename_replaces_extension() {
        assert_eq!(mp3_filename("clip.mp4"), "clip.mp3");
        assert_eq!(mp3_filename("My Talk.webm"), "My Talk.mp3");
    }

    #[test]
    fn mp3_filename_truncates_at_first_dot() {
        assert_eq!(mp3_filename("archive.tar.gz"), "archive.mp3");
        assert_eq!(mp3_filename("Ep. 12.mkv"), "Ep.mp3");
    }

    #[test]
    fn mp3_filename_without_extension() {
        assert_eq!(mp3_filename("clip"), "clip.mp3");
    }

    #[test]
    fn mp3_filename_empty_base_falls_back() {
        assert_eq!(mp3_filename(".webm"), "audio.mp3");
        assert_eq!(mp3_filename(""), "audio.mp3");
    }
}
