//! Typed, fail-fast access to environment configuration.
//!
//! [`Environment`] wraps an injected [`Source`] and turns its raw, possibly
//! absent entries into `String`, `bool` or `i64` values. A lookup either yields
//! a value of the requested type or an [`EnvError`]:
//!
//! - absent, no default  → [`EnvError::Missing`]
//! - absent, default     → the default, returned as given
//! - present, malformed  → [`EnvError::Invalid`], even when a default exists
//!
//! Every call re-reads the store. Nothing is cached, written or logged.

pub mod source;
pub mod value;

pub use source::{Overlay, ProcessEnv, Source, read_env_file};
pub use value::FromEnv;

use crate::error::EnvError;

/// Typed accessor over a read-only key/value store.
#[derive(Debug, Clone, Default)]
pub struct Environment<S = ProcessEnv> {
    source: S,
}

impl Environment<ProcessEnv> {
    /// Accessor bound to the process environment.
    pub fn process() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: Source> Environment<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// `true` when `name` has an entry and that entry is non-empty.
    pub fn has(&self, name: &str) -> bool {
        self.source
            .var_os(name)
            .is_some_and(|value| !value.is_empty())
    }

    pub fn has_not(&self, name: &str) -> bool {
        !self.has(name)
    }

    /// Generic lookup backing the typed getters.
    pub fn get<T: FromEnv>(&self, name: &str, default: Option<T>) -> Result<T, EnvError> {
        let Some(raw) = self.source.var_os(name) else {
            return default.ok_or_else(|| EnvError::missing(name));
        };
        // Non-UTF-8 entries cannot be any of the supported types.
        let raw = raw.into_string().map_err(|_| EnvError::invalid(name))?;
        T::parse(&raw).ok_or_else(|| EnvError::invalid(name))
    }

    pub fn string(&self, name: &str, default: Option<&str>) -> Result<String, EnvError> {
        self.get(name, default.map(str::to_string))
    }

    pub fn boolean(&self, name: &str, default: Option<bool>) -> Result<bool, EnvError> {
        self.get(name, default)
    }

    pub fn integer(&self, name: &str, default: Option<i64>) -> Result<i64, EnvError> {
        self.get(name, default)
    }

    pub fn string_equal(&self, name: &str, value: &str) -> Result<bool, EnvError> {
        Ok(self.string(name, None)? == value)
    }

    pub fn string_not_equal(&self, name: &str, value: &str) -> Result<bool, EnvError> {
        self.string_equal(name, value).map(|equal| !equal)
    }

    pub fn boolean_equal(&self, name: &str, value: bool) -> Result<bool, EnvError> {
        Ok(self.boolean(name, None)? == value)
    }

    pub fn boolean_not_equal(&self, name: &str, value: bool) -> Result<bool, EnvError> {
        self.boolean_equal(name, value).map(|equal| !equal)
    }

    pub fn integer_equal(&self, name: &str, value: i64) -> Result<bool, EnvError> {
        Ok(self.integer(name, None)? == value)
    }

    pub fn integer_not_equal(&self, name: &str, value: i64) -> Result<bool, EnvError> {
        self.integer_equal(name, value).map(|equal| !equal)
    }
}
