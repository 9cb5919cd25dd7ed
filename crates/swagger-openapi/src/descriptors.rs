use std::collections::BTreeMap;

use serde::Serialize;
use swagger_config::{Contact, GrantType};

/// Which endpoints are documented, and under which group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedApi {
    pub group_name: String,
    /// Ant-style patterns, in configuration order.
    pub paths: Vec<String>,
}

/// Human facing metadata of the documented API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub terms_of_service_url: String,
    pub contact: Contact,
    pub license: String,
    pub license_url: String,
}

/// How documented endpoints declare OAuth2 protected access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuth2SecurityScheme {
    pub grant_type: GrantType,
    pub authorization_server_uri: String,
    pub scopes: BTreeMap<String, String>,
    pub token_uri: String,
}
