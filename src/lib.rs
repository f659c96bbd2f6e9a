// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2027-09-02
// Author: Lukas Bower

//! Early-boot configuration lookup.
//!
//! Boot parameters reach userspace through several channels: the firmware
//! device tree, `ro.boot.*` properties, the kernel bootconfig blob and the
//! kernel command line.  This crate parses the raw text formats and resolves
//! a key across those channels in a fixed order.

/// Raw text parsers (cmdline tokenizer, bootconfig lines)
pub mod parser;

/// Layered resolver and the device-tree directory cache
pub mod resolver;

/// Data access seam and its host implementation
pub mod env;

/// Source locations
pub mod config;

pub mod error;

pub use config::BootPaths;
pub use env::{BootEnv, HostEnv};
pub use error::{ConfigError, SourceError};
pub use parser::{
    get_boot_config_from_kernel, get_bootconfig_from_str, import_bootconfig_from_str,
    parse_cmdline, ConfigPair,
};
pub use resolver::{
    android_dt_dir, get_boot_config, get_boot_config_from_kernel_cmdline, get_bootconfig,
    import_bootconfig, system, BootConfig, ConfigSource, Resolved,
};
