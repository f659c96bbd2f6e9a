// CLASSIFICATION: COMMUNITY
// Filename: boot_config.rs v0.5
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Layered boot configuration lookup.
//!
//! A bare key such as `serialno` is looked up, in order, as:
//!
//! 1. the device-tree file `<dt_dir>serialno` (only on compatible firmware),
//! 2. the property `ro.boot.serialno`,
//! 3. `androidboot.serialno` in `/proc/bootconfig`,
//! 4. `androidboot.serialno` on `/proc/cmdline`.
//!
//! The first source that has the key wins; values are never merged.

use std::fmt;
use std::path::Path;

use log::{debug, trace};

use super::dt_dir::{DtDirCache, ANDROID_DT_DIR_BOOTCONFIG_KEY, ANDROID_DT_DIR_CMDLINE_KEY};
use crate::config::BootPaths;
use crate::env::BootEnv;
use crate::parser::{self, ANDROIDBOOT_PREFIX};

/// Property namespace mirroring the boot parameters once init has run.
pub const RO_BOOT_PREFIX: &str = "ro.boot.";

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigSource {
    DeviceTree,
    Property,
    Bootconfig,
    KernelCmdline,
}

impl ConfigSource {
    /// Resolution order, most authoritative first.
    pub const ORDER: [ConfigSource; 4] = [
        ConfigSource::DeviceTree,
        ConfigSource::Property,
        ConfigSource::Bootconfig,
        ConfigSource::KernelCmdline,
    ];
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSource::DeviceTree => "device-tree",
            ConfigSource::Property => "property",
            ConfigSource::Bootconfig => "bootconfig",
            ConfigSource::KernelCmdline => "cmdline",
        };
        f.write_str(name)
    }
}

/// A found value and the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: ConfigSource,
}

/// Boot configuration resolver over a [`BootEnv`].
///
/// Owns its device-tree directory cache: the directory is resolved on first
/// use and kept for the lifetime of the resolver.
#[derive(Debug)]
pub struct BootConfig<E> {
    env: E,
    paths: BootPaths,
    dt_dir: DtDirCache,
}

impl<E: BootEnv> BootConfig<E> {
    /// Resolver reading the kernel pseudo-files.
    pub fn new(env: E) -> Self {
        Self::with_paths(env, BootPaths::proc())
    }

    pub fn with_paths(env: E, paths: BootPaths) -> Self {
        Self {
            env,
            paths,
            dt_dir: DtDirCache::new(),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn paths(&self) -> &BootPaths {
        &self.paths
    }

    /// Directory holding device-tree boot parameters, always `/`-terminated.
    pub fn android_dt_dir(&self) -> &str {
        self.dt_dir.get_or_resolve(
            || self.bootconfig(ANDROID_DT_DIR_BOOTCONFIG_KEY),
            || self.from_kernel_cmdline(ANDROID_DT_DIR_CMDLINE_KEY),
            &self.paths.fallback_dt_dir,
        )
    }

    fn read_bootconfig(&self) -> String {
        // An unreadable bootconfig parses like an empty one.
        self.env
            .read_file_to_string(&self.paths.bootconfig)
            .unwrap_or_default()
    }

    /// Visit every pair of the bootconfig file, in file order.
    pub fn import_bootconfig<F>(&self, visit: F)
    where
        F: FnMut(String, String),
    {
        parser::import_bootconfig_from_str(&self.read_bootconfig(), visit);
    }

    /// First value of the full bootconfig `key` (prefix included).
    pub fn bootconfig(&self, key: &str) -> Option<String> {
        parser::get_bootconfig_from_str(&self.read_bootconfig(), key)
    }

    /// Kernel command line with its trailing newline removed.
    pub fn kernel_cmdline(&self) -> Option<String> {
        let mut cmdline = self.env.read_file_to_string(&self.paths.cmdline)?;
        if cmdline.ends_with('\n') {
            cmdline.pop();
        }
        Some(cmdline)
    }

    /// Value of `androidboot.<android_key>` on the kernel command line.
    pub fn from_kernel_cmdline(&self, android_key: &str) -> Option<String> {
        parser::get_boot_config_from_kernel(&self.kernel_cmdline()?, android_key)
    }

    /// Look `key` up in a single source.
    pub fn lookup(&self, source: ConfigSource, key: &str) -> Option<String> {
        match source {
            ConfigSource::DeviceTree => self.from_device_tree(key),
            ConfigSource::Property => self.from_property(key),
            ConfigSource::Bootconfig => self.bootconfig(&format!("{ANDROIDBOOT_PREFIX}{key}")),
            ConfigSource::KernelCmdline => self.from_kernel_cmdline(key),
        }
    }

    fn from_device_tree(&self, key: &str) -> Option<String> {
        let dt_dir = self.android_dt_dir();
        if !self.env.is_dt_compatible(dt_dir) {
            trace!("device tree at {dt_dir} not compatible, skipping");
            return None;
        }
        let path = format!("{dt_dir}{key}");
        let mut value = self.env.read_file_to_string(Path::new(&path))?;
        // Device-tree strings carry their NUL terminator.
        value.pop()?;
        Some(value)
    }

    fn from_property(&self, key: &str) -> Option<String> {
        let value = self
            .env
            .get_property(&format!("{RO_BOOT_PREFIX}{key}"), "");
        Some(value).filter(|v| !v.is_empty())
    }

    /// Resolve `key` across every source, reporting which one answered.
    pub fn resolve(&self, key: &str) -> Option<Resolved> {
        let resolved = ConfigSource::ORDER.iter().find_map(|&source| {
            self.lookup(source, key)
                .map(|value| Resolved { value, source })
        });
        match &resolved {
            Some(r) => debug!("boot config {key} = {:?} (from {})", r.value, r.source),
            None => debug!("boot config {key} not found"),
        }
        resolved
    }

    /// Resolve `key` across every source.
    pub fn get(&self, key: &str) -> Option<String> {
        self.resolve(key).map(|r| r.value)
    }
}
