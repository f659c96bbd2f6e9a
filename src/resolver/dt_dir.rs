// CLASSIFICATION: COMMUNITY
// Filename: dt_dir.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Location of the device-tree directory holding Android boot parameters.

use log::info;
use once_cell::sync::OnceCell;

use crate::config::with_trailing_slash;

/// Bootconfig key overriding the device-tree directory.
pub const ANDROID_DT_DIR_BOOTCONFIG_KEY: &str = "androidboot.android_dt_dir";
/// Same override on the kernel cmdline, without its `androidboot.` prefix.
pub const ANDROID_DT_DIR_CMDLINE_KEY: &str = "android_dt_dir";

/// Compute-once holder for the device-tree directory.
///
/// The first caller runs the lookup; concurrent first callers block until it
/// finishes and every caller sees the same string afterwards.  There is no
/// way to reset it.
#[derive(Debug, Default)]
pub struct DtDirCache {
    dir: OnceCell<String>,
}

impl DtDirCache {
    pub const fn new() -> Self {
        Self {
            dir: OnceCell::new(),
        }
    }

    /// The cached directory, if it was already resolved.
    pub fn get(&self) -> Option<&str> {
        self.dir.get().map(String::as_str)
    }

    pub fn get_or_resolve<B, C>(&self, from_bootconfig: B, from_cmdline: C, fallback: &str) -> &str
    where
        B: FnOnce() -> Option<String>,
        C: FnOnce() -> Option<String>,
    {
        self.dir
            .get_or_init(|| resolve_dt_dir(from_bootconfig, from_cmdline, fallback))
    }
}

/// Pick the directory: bootconfig first, then the cmdline, then `fallback`.
///
/// An empty override counts as none.  The result always ends with `/`.
pub fn resolve_dt_dir<B, C>(from_bootconfig: B, from_cmdline: C, fallback: &str) -> String
where
    B: FnOnce() -> Option<String>,
    C: FnOnce() -> Option<String>,
{
    let dir = match from_bootconfig().or_else(from_cmdline) {
        Some(dir) if !dir.is_empty() => with_trailing_slash(dir),
        _ => with_trailing_slash(fallback.to_owned()),
    };
    info!("Using Android DT directory {dir}");
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const FALLBACK: &str = "/proc/device-tree/firmware/android/";

    #[test]
    fn bootconfig_wins_and_gets_slash() {
        let dir = resolve_dt_dir(|| Some("/dt/bc".into()), || Some("/dt/cmd/".into()), FALLBACK);
        assert_eq!(dir, "/dt/bc/");
    }

    #[test]
    fn cmdline_used_when_bootconfig_absent() {
        let dir = resolve_dt_dir(|| None, || Some("/dt/cmd/".into()), FALLBACK);
        assert_eq!(dir, "/dt/cmd/");
    }

    #[test]
    fn empty_bootconfig_value_does_not_consult_cmdline() {
        let asked = Cell::new(false);
        let dir = resolve_dt_dir(
            || Some(String::new()),
            || {
                asked.set(true);
                Some("/dt/cmd/".into())
            },
            FALLBACK,
        );
        assert_eq!(dir, FALLBACK);
        assert!(!asked.get());
    }

    #[test]
    fn fallback_when_nothing_supplied() {
        assert_eq!(resolve_dt_dir(|| None, || None, FALLBACK), FALLBACK);
    }

    #[test]
    fn cache_runs_lookup_once() {
        let cache = DtDirCache::new();
        let calls = Cell::new(0);
        let lookup = || {
            calls.set(calls.get() + 1);
            None
        };
        assert!(cache.get().is_none());
        let first = cache.get_or_resolve(lookup, || None, FALLBACK).to_owned();
        let second = cache.get_or_resolve(lookup, || Some("/other".into()), FALLBACK);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.get(), Some(FALLBACK));
    }
}
