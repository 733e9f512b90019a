//! Environment lookup sources.

use std::collections::HashMap;
use std::env::{self, VarError};
use std::hash::BuildHasher;

use tracing::warn;

/// Read-only key to string lookup the binder resolves variables against.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment as visible at lookup time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(env = key, "environment variable is not valid unicode, treating as unset");
                None
            }
        }
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
