// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-09-02

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const PROC_CMDLINE: &str = "/proc/cmdline";
pub const PROC_BOOTCONFIG: &str = "/proc/bootconfig";
pub const DEFAULT_ANDROID_DT_DIR: &str = "/proc/device-tree/firmware/android/";

/// Locations of the raw boot configuration sources.
///
/// Defaults are the kernel's well-known pseudo-files; each can be redirected
/// through the environment (`BOOTCFG_CMDLINE`, `BOOTCFG_BOOTCONFIG`,
/// `BOOTCFG_FALLBACK_DT_DIR`, `BOOTCFG_PROPERTIES`) or a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BootPaths {
    pub cmdline: PathBuf,
    pub bootconfig: PathBuf,
    pub fallback_dt_dir: String,
    pub property_file: Option<PathBuf>,
}

impl Default for BootPaths {
    fn default() -> Self {
        Self {
            cmdline: std::env::var("BOOTCFG_CMDLINE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PROC_CMDLINE.into()),
            bootconfig: std::env::var("BOOTCFG_BOOTCONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PROC_BOOTCONFIG.into()),
            fallback_dt_dir: std::env::var("BOOTCFG_FALLBACK_DT_DIR")
                .map(with_trailing_slash)
                .unwrap_or_else(|_| DEFAULT_ANDROID_DT_DIR.into()),
            property_file: std::env::var("BOOTCFG_PROPERTIES").ok().map(PathBuf::from),
        }
    }
}

impl BootPaths {
    /// The kernel pseudo-files, ignoring the environment.
    pub fn proc() -> Self {
        Self {
            cmdline: PROC_CMDLINE.into(),
            bootconfig: PROC_BOOTCONFIG.into(),
            fallback_dt_dir: DEFAULT_ANDROID_DT_DIR.into(),
            property_file: None,
        }
    }

    /// Load paths from a TOML file; missing fields take [`Default`] values.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut paths: BootPaths = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        paths.fallback_dt_dir = with_trailing_slash(paths.fallback_dt_dir);
        Ok(paths)
    }
}

/// Append `/` unless `dir` already ends with one.
pub fn with_trailing_slash(mut dir: String) -> String {
    if !dir.ends_with('/') {
        dir.push('/');
    }
    dir
}
