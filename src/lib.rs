// Library root — exposes internals for integration tests and the binary.
// The binary entry point is src/main.rs.

pub mod config;
pub mod environment;
pub mod error;
pub mod logger;

pub use config::Settings;
pub use environment::Environment;
pub use error::{AppError, EnvError};
