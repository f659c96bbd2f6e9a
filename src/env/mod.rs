// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Collaborators the resolver reads raw data through.
//!
//! The resolver itself never touches the filesystem or the property store;
//! it goes through a [`BootEnv`], so tests can script every source.

use std::path::Path;

pub mod host;
pub mod properties;

pub use host::HostEnv;
pub use properties::PropertyMap;

/// Raw data access used by [`crate::resolver::BootConfig`].
///
/// Every method is infallible at this boundary: a missing file, a permission
/// error or an absent property all read as "not there".
pub trait BootEnv {
    /// Whole content of the file at `path`, or `None` if it cannot be read.
    fn read_file_to_string(&self, path: &Path) -> Option<String>;

    /// Value of the system property `name`, or `default` when unset.
    fn get_property(&self, name: &str, default: &str) -> String;

    /// Whether device-tree parameters under `dt_dir` should be consulted.
    fn is_dt_compatible(&self, dt_dir: &str) -> bool;
}

impl<E: BootEnv + ?Sized> BootEnv for &E {
    fn read_file_to_string(&self, path: &Path) -> Option<String> {
        (**self).read_file_to_string(path)
    }

    fn get_property(&self, name: &str, default: &str) -> String {
        (**self).get_property(name, default)
    }

    fn is_dt_compatible(&self, dt_dir: &str) -> bool {
        (**self).is_dt_compatible(dt_dir)
    }
}
