//! Resolves bound swagger properties into documentation descriptors.
//!
//! [`Documentation::configure`] is the startup routine: it gates the
//! Swagger descriptors on `swagger.enabled` and the OAuth2 scheme on
//! `swagger.o-auth2.enabled`, then hands back an owned value for whatever
//! serves the documentation. [`Documentation::openapi`] applies it to a
//! `utoipa` document.

pub mod autoconfig;
pub mod descriptors;
pub mod paths;
pub mod render;
pub mod version;

pub use autoconfig::{
    oauth2_security_scheme, Documentation, SwaggerAutoConfiguration, SwaggerDocs,
};
pub use descriptors::{ApiInfo, GroupedApi, OAuth2SecurityScheme};
pub use paths::PathSelector;
pub use render::OAUTH2_SCHEME_NAME;
pub use version::{resolve_version, StaticVersion, SwaggerVersion, DEFAULT_VERSION};
