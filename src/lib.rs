//! Library exports.
//!
//! Re-exports the workspace crates under one roof so binaries and
//! integration tests have a single import path:
//! - `config`: binding of `swagger.*` / `swagger.o-auth2.*` properties
//! - `openapi`: descriptor resolution and `utoipa` rendering
//! - `server`: the Actix-web documentation server
//! - `telemetry`: structured logging setup

pub use swagger_config as config;
pub use swagger_observability as telemetry;
pub use swagger_openapi as openapi;
pub use swagger_server as server;
