// CLASSIFICATION: COMMUNITY
// Filename: host.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! [`BootEnv`] backed by the running host: real files, a property snapshot
//! and the firmware `compatible` node.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::{BootEnv, PropertyMap};
use crate::config::BootPaths;
use crate::error::SourceError;

/// Value of `<dt_dir>compatible` on firmware exposing Android parameters.
pub const DT_COMPATIBLE: &str = "android,firmware";

#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    properties: PropertyMap,
}

impl HostEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: PropertyMap) -> Self {
        Self { properties }
    }

    /// Build from `paths`, loading the property file when one is configured.
    /// An unreadable property file leaves the snapshot empty.
    pub fn from_paths(paths: &BootPaths) -> Self {
        let properties = match &paths.property_file {
            Some(path) => match read_text(path) {
                Ok(text) => PropertyMap::parse(&text),
                Err(e) => {
                    warn!("ignoring property file: {e}");
                    PropertyMap::new()
                }
            },
            None => PropertyMap::new(),
        };
        Self { properties }
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

fn read_text(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

impl BootEnv for HostEnv {
    fn read_file_to_string(&self, path: &Path) -> Option<String> {
        read_text(path)
            .map_err(|e| debug!("{e}"))
            .ok()
    }

    fn get_property(&self, name: &str, default: &str) -> String {
        self.properties
            .get(name)
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_owned()
    }

    fn is_dt_compatible(&self, dt_dir: &str) -> bool {
        let path = format!("{dt_dir}compatible");
        self.read_file_to_string(Path::new(&path))
            .is_some_and(|v| v.trim_end_matches('\0') == DT_COMPATIBLE)
    }
}
