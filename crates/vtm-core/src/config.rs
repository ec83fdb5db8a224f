use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/vtm/config.toml`.
///
/// Both directories default to the paths the tool has always used, so a run
/// without a config file or flags behaves like the original. Tests and the
/// CLI override them per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VtmConfig {
    /// Staging directory the video is downloaded into; removed after each run.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
    /// Directory converted MP3 files are written to; accumulates across runs.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("./temp")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./mp3_files")
}

impl Default for VtmConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
            output_dir: default_output_dir(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vtm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VtmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VtmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VtmConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_config_values() {
        let cfg = VtmConfig::default();
        assert_eq!(cfg.temp_dir, Path::new("./temp"));
        assert_eq!(cfg.output_dir, Path::new("./mp3_files"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = VtmConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: VtmConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.temp_dir, cfg.temp_dir);
        assert_eq!(parsed.output_dir, cfg.output_dir);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            temp_dir = "/var/tmp/vtm-staging"
            output_dir = "/home/me/music"
        "#;
        let cfg: VtmConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.temp_dir, Path::new("/var/tmp/vtm-staging"));
        assert_eq!(cfg.output_dir, Path::new("/home/me/music"));
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let toml = r#"
            output_dir = "/home/me/music"
        "#;
        let cfg: VtmConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.temp_dir, Path::new("./temp"));
        assert_eq!(cfg.output_dir, Path::new("/home/me/music"));

        let empty: VtmConfig = toml::from_str("").unwrap();
        assert_eq!(empty.temp_dir, Path::new("./temp"));
        assert_eq!(empty.output_dir, Path::new("./mp3_files"));
    }
}
