// CLASSIFICATION: COMMUNITY
// Filename: bootconfig.rs v0.4
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Line parser for the kernel bootconfig text (`/proc/bootconfig`).
//!
//! The kernel re-serializes list values when it exposes bootconfig: the
//! board definition `key=value1,value2` is read back as
//! `key = "value1", "value2"`.  The parser folds that form back into the
//! cmdline-style `value1,value2` so consumers see one notation regardless of
//! where a parameter came from.

use super::{trim, trim_key, ConfigPair};

/// Keys whose list elements may themselves contain commas.  Their quotes are
/// dropped but the `, ` separators are kept as they are.
const SPACE_DELIMITED_KEYS: &[&str] = &["androidboot.boot_device", "androidboot.boot_devices"];

const LIST_SEPARATOR: &str = r#"", ""#;

/// Lazy iterator over the pairs of a bootconfig blob, in blob order.
#[derive(Debug, Clone)]
pub struct BootconfigPairs<'a> {
    lines: std::str::Split<'a, char>,
}

impl<'a> BootconfigPairs<'a> {
    pub fn new(bootconfig: &'a str) -> Self {
        Self {
            lines: bootconfig.split('\n'),
        }
    }
}

impl Iterator for BootconfigPairs<'_> {
    type Item = ConfigPair;

    fn next(&mut self) -> Option<ConfigPair> {
        self.lines.by_ref().find_map(parse_line)
    }
}

fn parse_line(line: &str) -> Option<ConfigPair> {
    let (raw_key, raw_value) = match line.split_once('=') {
        Some((k, v)) => (k, Some(v)),
        None => (line, None),
    };
    let key = trim_key(raw_key)?;
    let value = raw_value
        .map(|v| normalize_value(key, trim(v)))
        .unwrap_or_default();
    Some(ConfigPair::new(key, value))
}

fn normalize_value(key: &str, value: &str) -> String {
    if SPACE_DELIMITED_KEYS.contains(&key) {
        return value.replace('"', "");
    }
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.replace(LIST_SEPARATOR, ",")
}

/// Feed every `(key, value)` pair of `bootconfig` to `visit`, in blob order.
pub fn import_bootconfig_from_str<F>(bootconfig: &str, mut visit: F)
where
    F: FnMut(String, String),
{
    for pair in BootconfigPairs::new(bootconfig) {
        visit(pair.key, pair.value);
    }
}

/// Value of the first line whose key equals `key`.
pub fn get_bootconfig_from_str(bootconfig: &str, key: &str) -> Option<String> {
    BootconfigPairs::new(bootconfig)
        .find(|pair| pair.key == key)
        .map(|pair| pair.value)
}
