use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseGrantTypeError;

/// Values bound from the `swagger.*` keys.
///
/// Every string defaults to `""`, so consumers never see a missing value.
/// Field names are the snake_case form of the configuration keys; sources
/// go through [`Relaxed`](crate::Relaxed) so `group-name` lands here too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwaggerProperties {
    pub enabled: bool,
    pub group_name: String,
    pub paths: Vec<String>,
    pub title: String,
    pub description: String,
    /// Bound for completeness. The displayed API version never reads it.
    pub version: String,
    pub terms_of_service_url: String,
    pub contact: Contact,
    pub license: License,
    /// The `swagger.o-auth2.*` subtree, activated independently.
    pub o_auth2: OAuth2Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub url: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct License {
    pub r#type: String,
    pub url: String,
}

/// Values bound from the `swagger.o-auth2.*` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OAuth2Properties {
    pub enabled: bool,
    pub grant_type: GrantType,
    pub resource: Resource,
    pub client: Client,
    pub token_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Resource {
    pub authorization_server_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Client {
    /// Scope key to human readable description.
    pub scopes: BTreeMap<String, String>,
}

/// OAuth2 flows a documented API can declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrantType {
    AuthorizationCode,
    #[default]
    ClientCredentials,
    Implicit,
    Password,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "AUTHORIZATION_CODE",
            GrantType::ClientCredentials => "CLIENT_CREDENTIALS",
            GrantType::Implicit => "IMPLICIT",
            GrantType::Password => "PASSWORD",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantType {
    type Err = ParseGrantTypeError;

    /// Relaxed: case-insensitive, `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "AUTHORIZATION_CODE" => Ok(GrantType::AuthorizationCode),
            "CLIENT_CREDENTIALS" => Ok(GrantType::ClientCredentials),
            "IMPLICIT" => Ok(GrantType::Implicit),
            "PASSWORD" => Ok(GrantType::Password),
            _ => Err(ParseGrantTypeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for GrantType {
    type Error = ParseGrantTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
