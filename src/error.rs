//! Application-wide error types.

use thiserror::Error;

/// Failure of a single environment lookup.
///
/// Both kinds are fatal to the configuration phase; the accessor never
/// substitutes a value once one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// No entry in the store and no default supplied.
    #[error("Environment variable '{name}' is undefined.")]
    Missing { name: String },

    /// An entry exists but does not parse as the requested type.
    #[error("Environment variable '{name}' is not valid.")]
    Invalid { name: String },
}

impl EnvError {
    pub fn missing(name: &str) -> Self {
        Self::Missing { name: name.to_string() }
    }

    pub fn invalid(name: &str) -> Self {
        Self::Invalid { name: name.to_string() }
    }

    /// The variable the failed lookup was for.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::Invalid { name } => name,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_message_is_verbatim() {
        let e = EnvError::missing("PORT");
        assert_eq!(e.to_string(), "Environment variable 'PORT' is undefined.");
        assert_eq!(e.name(), "PORT");
    }

    #[test]
    fn invalid_message_is_verbatim() {
        let e = EnvError::invalid("DEBUG");
        assert_eq!(e.to_string(), "Environment variable 'DEBUG' is not valid.");
        assert_eq!(e.name(), "DEBUG");
    }

    #[test]
    fn env_error_passes_through_app_error() {
        let e: AppError = EnvError::missing("STAGE").into();
        assert_eq!(e.to_string(), "Environment variable 'STAGE' is undefined.");
        assert!(matches!(e, AppError::Env(EnvError::Missing { .. })));
    }

    #[test]
    fn config_error_display() {
        let e = AppError::Config("cannot read .env".into());
        assert!(e.to_string().contains("config error"));
        assert!(e.to_string().contains("cannot read .env"));
    }

    #[test]
    fn logger_error_display() {
        let e = AppError::Logger("already initialized".into());
        assert!(e.to_string().contains("already initialized"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        let _: &dyn Error = &e;
    }
}
