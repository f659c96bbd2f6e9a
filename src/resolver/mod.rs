// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Boot configuration resolution across device tree, properties,
//! bootconfig and the kernel cmdline.

use once_cell::sync::Lazy;

pub mod boot_config;
pub mod dt_dir;

pub use boot_config::{BootConfig, ConfigSource, Resolved, RO_BOOT_PREFIX};
pub use dt_dir::{resolve_dt_dir, DtDirCache};

use crate::config::BootPaths;
use crate::env::HostEnv;

static SYSTEM: Lazy<BootConfig<HostEnv>> = Lazy::new(|| {
    let paths = BootPaths::default();
    BootConfig::with_paths(HostEnv::from_paths(&paths), paths)
});

/// Process-wide resolver over the host environment.
///
/// Paths come from [`BootPaths::default`] the first time this is called; the
/// device-tree directory it resolves is kept for the life of the process.
pub fn system() -> &'static BootConfig<HostEnv> {
    &SYSTEM
}

/// Resolve `key` with the process-wide resolver.
pub fn get_boot_config(key: &str) -> Option<String> {
    system().get(key)
}

/// Device-tree directory of the process-wide resolver.
pub fn android_dt_dir() -> &'static str {
    system().android_dt_dir()
}

/// Value of the full bootconfig `key` in the host's bootconfig file.
pub fn get_bootconfig(key: &str) -> Option<String> {
    system().bootconfig(key)
}

/// Visit every pair of the host's bootconfig file.
pub fn import_bootconfig<F>(visit: F)
where
    F: FnMut(String, String),
{
    system().import_bootconfig(visit)
}

/// Value of `androidboot.<android_key>` on the host's kernel cmdline.
pub fn get_boot_config_from_kernel_cmdline(android_key: &str) -> Option<String> {
    system().from_kernel_cmdline(android_key)
}
