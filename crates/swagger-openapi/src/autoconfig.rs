use swagger_config::{GrantType, OAuth2Properties, SwaggerProperties};

use crate::descriptors::{ApiInfo, GroupedApi, OAuth2SecurityScheme};
use crate::version::{resolve_version, SwaggerVersion};

/// Builds the Swagger descriptors from bound properties.
///
/// Construction never fails: every property already has a default.
#[derive(Default)]
pub struct SwaggerAutoConfiguration<'a> {
    properties: SwaggerProperties,
    version: Option<&'a dyn SwaggerVersion>,
}

impl<'a> SwaggerAutoConfiguration<'a> {
    pub fn new(properties: SwaggerProperties) -> Self {
        Self {
            properties,
            version: None,
        }
    }

    pub fn with_version(mut self, version: &'a dyn SwaggerVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn properties(&self) -> &SwaggerProperties {
        &self.properties
    }

    pub fn grouped_api(&self) -> GroupedApi {
        GroupedApi {
            group_name: self.properties.group_name.clone(),
            paths: self.properties.paths.clone(),
        }
    }

    pub fn api_info(&self) -> ApiInfo {
        let props = &self.properties;
        ApiInfo {
            title: props.title.clone(),
            description: props.description.clone(),
            version: resolve_version(self.version),
            terms_of_service_url: props.terms_of_service_url.clone(),
            contact: props.contact.clone(),
            license: props.license.r#type.clone(),
            license_url: props.license.url.clone(),
        }
    }
}

/// The OAuth2 security scheme, or `None` when `swagger.o-auth2.enabled` is off.
pub fn oauth2_security_scheme(properties: &OAuth2Properties) -> Option<OAuth2SecurityScheme> {
    if !properties.enabled {
        return None;
    }

    let needs_token_uri = matches!(
        properties.grant_type,
        GrantType::ClientCredentials | GrantType::Password | GrantType::AuthorizationCode
    );
    if needs_token_uri && properties.token_uri.is_empty() {
        tracing::warn!(
            grant_type = %properties.grant_type,
            "OAuth2 documentation enabled without swagger.o-auth2.token-uri"
        );
    }
    let needs_authorization_uri = matches!(
        properties.grant_type,
        GrantType::AuthorizationCode | GrantType::Implicit
    );
    if needs_authorization_uri && properties.resource.authorization_server_uri.is_empty() {
        tracing::warn!(
            grant_type = %properties.grant_type,
            "OAuth2 documentation enabled without swagger.o-auth2.resource.authorization-server-uri"
        );
    }

    Some(OAuth2SecurityScheme {
        grant_type: properties.grant_type,
        authorization_server_uri: properties.resource.authorization_server_uri.clone(),
        scopes: properties.client.scopes.clone(),
        token_uri: properties.token_uri.clone(),
    })
}

/// The Swagger descriptor pair registered when `swagger.enabled` is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerDocs {
    pub grouped_api: GroupedApi,
    pub api_info: ApiInfo,
}

/// Everything the documentation endpoint needs, resolved once at startup.
///
/// Swagger and OAuth2 are gated independently; either, both or neither may
/// be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    pub swagger: Option<SwaggerDocs>,
    pub oauth2: Option<OAuth2SecurityScheme>,
}

impl Documentation {
    pub fn configure(
        properties: &SwaggerProperties,
        version: Option<&dyn SwaggerVersion>,
    ) -> Self {
        let swagger = if properties.enabled {
            let mut autoconfig = SwaggerAutoConfiguration::new(properties.clone());
            if let Some(version) = version {
                autoconfig = autoconfig.with_version(version);
            }
            let docs = SwaggerDocs {
                grouped_api: autoconfig.grouped_api(),
                api_info: autoconfig.api_info(),
            };
            tracing::info!(
                group_name = %docs.grouped_api.group_name,
                version = %docs.api_info.version,
                "swagger documentation configured"
            );
            Some(docs)
        } else {
            tracing::info!("swagger documentation disabled");
            None
        };

        let oauth2 = oauth2_security_scheme(&properties.o_auth2);
        if let Some(scheme) = &oauth2 {
            tracing::info!(
                grant_type = %scheme.grant_type,
                scopes = scheme.scopes.len(),
                "OAuth2 security scheme configured"
            );
        }

        Self { swagger, oauth2 }
    }

    pub fn is_empty(&self) -> bool {
        self.swagger.is_none() && self.oauth2.is_none()
    }

    pub fn grouped_api(&self) -> Option<&GroupedApi> {
        self.swagger.as_ref().map(|docs| &docs.grouped_api)
    }

    pub fn api_info(&self) -> Option<&ApiInfo> {
        self.swagger.as_ref().map(|docs| &docs.api_info)
    }
}
