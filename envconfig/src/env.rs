//! Key/value sources consulted while binding

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::io;

/// The environment a specification is populated from.
///
/// `lookup` answers key queries; `read_file` loads file-backed values and
/// defaults to the local file system.
pub trait Environment {
    /// Value of `key`, if set.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Contents of the file at `path`.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// The current process environment.
///
/// Variables holding non-UTF-8 data are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        (**self).read_file(path)
    }
}
