//! Key/value stores the accessor can read from.
//!
//! A store maps a variable name to a raw value or nothing. The accessor only
//! ever reads; stores are expected to stay stable for the life of the process.

use std::{
    collections::{BTreeMap, HashMap},
    env,
    ffi::OsString,
    path::Path,
};

use crate::error::AppError;

/// Read-only view of a flat, string-keyed store.
pub trait Source {
    /// Raw entry for `name`, or `None` when absent.
    fn var_os(&self, name: &str) -> Option<OsString>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }
}

impl Source for HashMap<String, String> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl Source for BTreeMap<String, String> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

/// Two stores stacked: `primary` entries win, `fallback` fills the gaps.
///
/// An empty string in `primary` is still an entry and shadows `fallback`.
#[derive(Debug, Clone)]
pub struct Overlay<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Source, F: Source> Overlay<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Source, F: Source> Source for Overlay<P, F> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.primary
            .var_os(name)
            .or_else(|| self.fallback.var_os(name))
    }
}

/// Parse a dotenv file into a map without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, AppError> {
    let iter = dotenvy::from_path_iter(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item
            .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;
        vars.insert(key, value);
    }
    Ok(vars)
}
