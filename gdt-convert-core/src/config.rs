//! Optional TOML configuration for conversion runs
//!
//! Everything here is also settable from the CLI; flags win over file
//! values. The file is discovered next to the bundle folder or passed
//! explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Default config filename looked up beside a bundle folder
pub const CONFIG_FILE: &str = "gdt-convert.toml";

/// Run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Brand accent color (hex)
    pub accent_color: Option<String>,

    /// Directory the TypeScript module is written into
    pub output_dir: Option<PathBuf>,

    /// Always write the markdown validation report
    #[serde(default)]
    pub report: bool,

    /// Fail the run when any component stays incomplete
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Load configuration from an explicit file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConvertError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConvertError::Config { path: path.to_path_buf(), source })
    }

    /// Look for `gdt-convert.toml` inside the bundle folder, then beside it
    pub fn discover(bundle_folder: &Path) -> Result<Self> {
        let candidates = [
            bundle_folder.join(CONFIG_FILE),
            bundle_folder.parent().map(|p| p.join(CONFIG_FILE)).unwrap_or_default(),
        ];
        for candidate in candidates {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "accent_color = \"#123456\"\noutput_dir = \"src/data\"\nreport = true\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.accent_color.as_deref(), Some("#123456"));
        assert_eq!(config.output_dir.as_deref(), Some(Path::new("src/data")));
        assert!(config.report);
        assert!(!config.strict);
    }

    #[test]
    fn test_discover_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert!(config.accent_color.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_discover_prefers_bundle_folder() {
        let parent = tempfile::tempdir().unwrap();
        let bundle = parent.path().join("brand");
        fs::create_dir(&bundle).unwrap();
        fs::write(parent.path().join(CONFIG_FILE), "accent_color = \"#AAAAAA\"\n").unwrap();
        fs::write(bundle.join(CONFIG_FILE), "accent_color = \"#BBBBBB\"\n").unwrap();

        let config = Config::discover(&bundle).unwrap();
        assert_eq!(config.accent_color.as_deref(), Some("#BBBBBB"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "accent_color = [not toml").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Config { .. }));
    }
}
