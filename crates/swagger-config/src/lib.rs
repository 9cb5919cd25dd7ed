//! Configuration binding for swagger-autoconfig.
//!
//! Properties live under `swagger.*` and `swagger.o-auth2.*`. They can come
//! from a HOCON file, a YAML/TOML/JSON file, or `SWAGGER__*` environment
//! variables layered on top of either. Keys bind relaxed (`group-name`,
//! `groupName` or `group_name`). Anything not supplied keeps its default, so
//! a missing key never surfaces as an error.

mod error;
mod hocon_source;
mod properties;
mod relaxed;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ParseGrantTypeError, Result};
pub use hocon_source::HoconSource;
pub use properties::*;
pub use relaxed::Relaxed;

/// Environment variable prefix (`SWAGGER__ENABLED=true`).
pub const ENV_PREFIX: &str = "SWAGGER";
/// Nesting separator for environment keys (`SWAGGER__CONTACT__NAME`).
pub const ENV_SEPARATOR: &str = "__";
/// Explicit configuration file path, takes precedence over discovery.
pub const CONFIG_PATH_VAR: &str = "SWAGGER_CONFIG";
pub const DEFAULT_HOCON_PATH: &str = "application.conf";
/// Stem used to discover `application.yaml` / `.toml` / `.json`.
pub const DEFAULT_FILE_STEM: &str = "application";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub swagger: SwaggerProperties,
}

impl Settings {
    /// Resolve settings from the usual places.
    ///
    /// `SWAGGER_CONFIG` wins when set, then `application.conf`, then an
    /// optional `application.{yaml,toml,json}`. Environment overrides apply
    /// on top in every case.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var(CONFIG_PATH_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            let path = PathBuf::from(path);
            return if is_hocon(&path) {
                Self::from_hocon_path(&path)
            } else {
                Self::from_file(&path)
            };
        }

        let hocon = Path::new(DEFAULT_HOCON_PATH);
        if hocon.exists() {
            return Self::from_hocon_path(hocon);
        }

        tracing::debug!(
            "{} not found, reading optional {}.* and environment",
            DEFAULT_HOCON_PATH,
            DEFAULT_FILE_STEM
        );
        Self::bind(
            config::Config::builder()
                .add_source(Relaxed::new(
                    config::File::with_name(DEFAULT_FILE_STEM).required(false),
                ))
                .add_source(environment()),
        )
    }

    /// Load a HOCON file, then apply environment overrides.
    pub fn from_hocon_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let settings = Self::bind(
            config::Config::builder()
                .add_source(Relaxed::new(HoconSource::new(path)))
                .add_source(environment()),
        )
        .map_err(|e| match e {
            ConfigError::Source(config::ConfigError::Foreign(e)) => ConfigError::Hocon(e.to_string()),
            other => other,
        })?;

        tracing::info!(path = %path.display(), "loaded swagger configuration from HOCON");
        Ok(settings)
    }

    /// Load a YAML, TOML or JSON file (format from the extension), then
    /// apply environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let settings = Self::bind(
            config::Config::builder()
                .add_source(Relaxed::new(config::File::from(path)))
                .add_source(environment()),
        )?;

        tracing::info!(path = %path.display(), "loaded swagger configuration");
        Ok(settings)
    }

    /// Environment variables only.
    pub fn from_env() -> Result<Self> {
        Self::bind(config::Config::builder().add_source(environment()))
    }

    fn bind(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Log which parts of the documentation will be activated.
    pub fn log_summary(&self) {
        let swagger = &self.swagger;
        tracing::info!(
            swagger_enabled = swagger.enabled,
            group_name = %swagger.group_name,
            paths = swagger.paths.len(),
            oauth2_enabled = swagger.o_auth2.enabled,
            grant_type = %swagger.o_auth2.grant_type,
            scopes = swagger.o_auth2.client.scopes.len(),
            "swagger configuration resolved"
        );
    }
}

/// The `SWAGGER__*` environment source.
///
/// Keys keep the prefix so they land under `swagger.`; `SWAGGER__PATHS` is
/// split on commas.
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .keep_prefix(true)
        .list_separator(",")
        .with_list_parse_key("swagger.paths")
        .try_parsing(true)
}

fn is_hocon(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("conf") || ext.eq_ignore_ascii_case("hocon"))
        .unwrap_or(false)
}
