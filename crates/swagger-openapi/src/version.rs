/// Displayed when no [`SwaggerVersion`] override is supplied.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Supplies the API version shown in the documentation.
///
/// Hosts usually hand in their own build version here. Without an override
/// the documentation shows [`DEFAULT_VERSION`]; `swagger.version` is never
/// consulted.
pub trait SwaggerVersion: Send + Sync {
    fn version(&self) -> String;
}

/// A fixed version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersion(String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl SwaggerVersion for StaticVersion {
    fn version(&self) -> String {
        self.0.clone()
    }
}

pub fn resolve_version(version: Option<&dyn SwaggerVersion>) -> String {
    match version {
        Some(v) => v.version(),
        None => DEFAULT_VERSION.to_string(),
    }
}
