//! Startup settings resolved from the environment.
//!
//! The GraphQL listener is only started in the `production` stage; every
//! other stage resolves the same settings but leaves the listener off.

use crate::{
    environment::{Environment, Source},
    error::EnvError,
    logger,
};

/// Stage value that turns the listener on.
pub const STAGE_PRODUCTION: &str = "production";

/// Path the GraphQL endpoint is mounted at (GET and POST).
pub const GRAPHQL_PATH: &str = "/graphql";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Fully-resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Runtime stage from `STAGE` (required).
    pub stage: String,
    /// Whether the GraphQL listener should be started.
    pub listen: bool,
    /// Bind host from `HOST`.
    pub host: String,
    /// Bind port from `PORT`.
    pub port: u16,
    /// Log level from `LOG_LEVEL`, already validated.
    pub log_level: String,
}

impl Settings {
    /// Resolve settings, failing on the first missing or malformed variable.
    pub fn load<S: Source>(env: &Environment<S>) -> Result<Self, EnvError> {
        let stage = env.string("STAGE", None)?;
        let listen = env.string_equal("STAGE", STAGE_PRODUCTION)?;
        let host = env.string("HOST", Some(DEFAULT_HOST))?;

        let port = env.integer("PORT", Some(i64::from(DEFAULT_PORT)))?;
        let port = u16::try_from(port).map_err(|_| EnvError::invalid("PORT"))?;

        let log_level = env.string("LOG_LEVEL", Some(DEFAULT_LOG_LEVEL))?;
        logger::parse_level(&log_level).map_err(|_| EnvError::invalid("LOG_LEVEL"))?;

        Ok(Self { stage, listen, host, port, log_level })
    }

    /// `host:port` the GraphQL endpoint binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
