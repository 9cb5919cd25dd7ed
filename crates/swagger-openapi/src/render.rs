use utoipa::openapi::security::{
    AuthorizationCode, ClientCredentials, Flow, Implicit, OAuth2, Password, Scopes,
    SecurityRequirement, SecurityScheme,
};
use utoipa::openapi::{ContactBuilder, Info, InfoBuilder, LicenseBuilder, OpenApi};

use swagger_config::GrantType;

use crate::autoconfig::Documentation;
use crate::descriptors::{ApiInfo, OAuth2SecurityScheme};

/// Name the OAuth2 scheme is registered under in `components.securitySchemes`.
pub const OAUTH2_SCHEME_NAME: &str = "oauth2";

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

impl From<&ApiInfo> for Info {
    fn from(info: &ApiInfo) -> Self {
        let contact = &info.contact;
        let contact = if contact.name.is_empty() && contact.url.is_empty() && contact.email.is_empty()
        {
            None
        } else {
            Some(
                ContactBuilder::new()
                    .name(non_empty(&contact.name))
                    .url(non_empty(&contact.url))
                    .email(non_empty(&contact.email))
                    .build(),
            )
        };

        let license = non_empty(&info.license).map(|name| {
            LicenseBuilder::new()
                .name(name)
                .url(non_empty(&info.license_url))
                .build()
        });

        InfoBuilder::new()
            .title(info.title.as_str())
            .version(info.version.as_str())
            .description(non_empty(&info.description))
            .terms_of_service(non_empty(&info.terms_of_service_url))
            .contact(contact)
            .license(license)
            .build()
    }
}

impl From<&OAuth2SecurityScheme> for SecurityScheme {
    fn from(scheme: &OAuth2SecurityScheme) -> Self {
        let scopes = Scopes::from_iter(
            scheme
                .scopes
                .iter()
                .map(|(key, description)| (key.as_str(), description.as_str())),
        );

        let flow = match scheme.grant_type {
            GrantType::AuthorizationCode => Flow::AuthorizationCode(AuthorizationCode::new(
                scheme.authorization_server_uri.as_str(),
                scheme.token_uri.as_str(),
                scopes,
            )),
            GrantType::ClientCredentials => Flow::ClientCredentials(ClientCredentials::new(
                scheme.token_uri.as_str(),
                scopes,
            )),
            GrantType::Implicit => Flow::Implicit(Implicit::new(
                scheme.authorization_server_uri.as_str(),
                scopes,
            )),
            GrantType::Password => {
                Flow::Password(Password::new(scheme.token_uri.as_str(), scopes))
            }
        };

        SecurityScheme::OAuth2(OAuth2::new([flow]))
    }
}

impl OAuth2SecurityScheme {
    /// Requirement naming every configured scope.
    pub fn requirement(&self) -> SecurityRequirement {
        SecurityRequirement::new(OAUTH2_SCHEME_NAME, self.scopes.keys().map(String::as_str))
    }
}

impl Documentation {
    /// Apply the resolved descriptors to `base`.
    ///
    /// Returns `None` when Swagger is disabled: there is no document to serve.
    /// Otherwise the info block is replaced, paths outside the group are
    /// dropped and the OAuth2 scheme is attached when configured.
    pub fn openapi(&self, mut base: OpenApi) -> Option<OpenApi> {
        let docs = self.swagger.as_ref()?;

        base.info = Info::from(&docs.api_info);
        docs.grouped_api.select(&mut base);

        if let Some(oauth2) = &self.oauth2 {
            base.components
                .get_or_insert_with(Default::default)
                .add_security_scheme(OAUTH2_SCHEME_NAME, SecurityScheme::from(oauth2));
            base.security
                .get_or_insert_with(Vec::new)
                .push(oauth2.requirement());
        }

        Some(base)
    }
}
