// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Text parsers for the two raw boot configuration blobs.
//!
//! * [`cmdline`] – quote-aware tokenizer for `/proc/cmdline`
//! * [`bootconfig`] – line parser for `/proc/bootconfig`
//!
//! Both parsers are pure, never fail, and emit pairs in blob order without
//! deduplication.

use std::fmt;

pub mod bootconfig;
pub mod cmdline;

pub use bootconfig::{
    get_bootconfig_from_str, import_bootconfig_from_str, BootconfigPairs,
};
pub use cmdline::{get_boot_config_from_kernel, parse_cmdline, CmdlineTokens};

/// Prefix carried by Android boot parameters in bootconfig and the cmdline.
pub const ANDROIDBOOT_PREFIX: &str = "androidboot.";

/// One parsed `key[=value]` entry.
///
/// A key without `=` and a key with an empty right-hand side both carry an
/// empty `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPair {
    pub key: String,
    pub value: String,
}

impl ConfigPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ConfigPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl From<ConfigPair> for (String, String) {
    fn from(pair: ConfigPair) -> Self {
        (pair.key, pair.value)
    }
}

/// Whitespace as the C locale's `isspace` sees it.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(is_c_space)
}

/// Trimmed key, or `None` when nothing is left.
pub(crate) fn trim_key(raw: &str) -> Option<&str> {
    Some(trim(raw)).filter(|k| !k.is_empty())
}
