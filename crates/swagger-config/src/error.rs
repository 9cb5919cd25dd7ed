use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while binding configuration sources.
///
/// Resolving descriptors from bound properties never fails; only reading
/// and deserializing the sources can.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read HOCON configuration: {0}")]
    Hocon(String),

    #[error("failed to bind configuration: {0}")]
    Source(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown OAuth2 grant type `{0}` (expected AUTHORIZATION_CODE, CLIENT_CREDENTIALS, IMPLICIT or PASSWORD)"
)]
pub struct ParseGrantTypeError(pub String);
