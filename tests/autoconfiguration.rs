// Descriptor resolution from bound properties.

mod common;

use std::collections::BTreeMap;

use swagger_autoconfig::config::{GrantType, SwaggerProperties};
use swagger_autoconfig::openapi::{
    ApiInfo, Documentation, StaticVersion, SwaggerAutoConfiguration, SwaggerVersion,
    DEFAULT_VERSION,
};

use common::custom_properties;

#[test]
fn disabled_swagger_registers_no_descriptors() {
    for mut properties in [SwaggerProperties::default(), custom_properties()] {
        properties.enabled = false;
        properties.version = "3.2.1".to_string();

        let docs = Documentation::configure(&properties, None);
        assert!(docs.swagger.is_none());
        assert!(docs.grouped_api().is_none());
        assert!(docs.api_info().is_none());

        let version = StaticVersion::new("9.9.9");
        let docs = Documentation::configure(&properties, Some(&version));
        assert!(docs.swagger.is_none());
    }
}

#[test]
fn default_version_ignores_the_version_property() {
    for version in ["", "test version", "2.0.0"] {
        let mut properties = custom_properties();
        properties.version = version.to_string();

        let docs = Documentation::configure(&properties, None);
        assert_eq!(docs.api_info().unwrap().version, DEFAULT_VERSION);
        assert_eq!(DEFAULT_VERSION, "1.0.0");
    }
}

#[test]
fn version_override_wins_over_everything() {
    struct FromBuild;

    impl SwaggerVersion for FromBuild {
        fn version(&self) -> String {
            "test version".to_string()
        }
    }

    let mut properties = custom_properties();
    properties.version = "property version".to_string();

    let docs = Documentation::configure(&properties, Some(&FromBuild));
    assert_eq!(docs.api_info().unwrap().version, "test version");
}

#[test]
fn custom_properties_with_default_version() {
    let docs = Documentation::configure(&custom_properties(), None);

    let grouped = docs.grouped_api().unwrap();
    assert_eq!(grouped.group_name, "test group");
    assert_eq!(grouped.paths, vec!["/test/path"]);

    let info = docs.api_info().unwrap();
    assert_eq!(info.title, "test title");
    assert_eq!(info.description, "test description");
    assert_eq!(info.version, "1.0.0");
    assert_eq!(info.terms_of_service_url, "http://test.tos.url");
    assert_eq!(info.contact.name, "test contact name");
    assert_eq!(info.contact.url, "http://test.contact.url");
    assert_eq!(info.contact.email, "test@domain.com");
    assert_eq!(info.license, "test license type");
    assert_eq!(info.license_url, "http://test.lic.url");
}

#[test]
fn default_properties_resolve_to_empty_strings() {
    let properties = SwaggerProperties {
        enabled: true,
        ..Default::default()
    };

    let docs = Documentation::configure(&properties, None);
    assert_eq!(docs.grouped_api().unwrap().group_name, "");
    assert!(docs.grouped_api().unwrap().paths.is_empty());
    assert_eq!(
        docs.api_info().unwrap(),
        &ApiInfo {
            version: "1.0.0".to_string(),
            ..ApiInfo::default()
        }
    );
}

#[test]
fn autoconfiguration_matches_startup_routine() {
    let version = StaticVersion::new("test version");
    let autoconfig = SwaggerAutoConfiguration::new(custom_properties()).with_version(&version);
    let docs = Documentation::configure(&custom_properties(), Some(&version));

    assert_eq!(docs.grouped_api(), Some(&autoconfig.grouped_api()));
    assert_eq!(docs.api_info(), Some(&autoconfig.api_info()));
}

#[test]
fn paths_and_scopes_are_copied_in_order() {
    let mut properties = custom_properties();
    properties.paths = vec![
        "/z/**".to_string(),
        "/a/**".to_string(),
        "/z/**".to_string(),
    ];
    properties.o_auth2.enabled = true;
    properties.o_auth2.client.scopes = BTreeMap::from([
        ("write".to_string(), "Write".to_string()),
        ("read".to_string(), "Read".to_string()),
    ]);

    let docs = Documentation::configure(&properties, None);
    assert_eq!(docs.grouped_api().unwrap().paths, properties.paths);
    assert_eq!(
        docs.oauth2.as_ref().unwrap().scopes,
        properties.o_auth2.client.scopes
    );
}

#[test]
fn oauth2_descriptor_exposes_scopes_unchanged() {
    let mut properties = SwaggerProperties::default();
    properties.o_auth2.enabled = true;
    properties.o_auth2.grant_type = GrantType::ClientCredentials;
    properties.o_auth2.client.scopes = BTreeMap::from([
        ("test-1".to_string(), "test-scope-1".to_string()),
        ("test-2".to_string(), "test-scope-2".to_string()),
    ]);

    let docs = Documentation::configure(&properties, None);
    assert!(docs.swagger.is_none());

    let scheme = docs.oauth2.unwrap();
    assert_eq!(scheme.grant_type, GrantType::ClientCredentials);
    assert_eq!(scheme.scopes.len(), 2);
    assert_eq!(scheme.scopes["test-1"], "test-scope-1");
    assert_eq!(scheme.scopes["test-2"], "test-scope-2");
}

#[test]
fn oauth2_disabled_produces_no_scheme() {
    let mut properties = custom_properties();
    properties.o_auth2.token_uri = "http://localhost/oauth2/token".to_string();

    let docs = Documentation::configure(&properties, None);
    assert!(docs.oauth2.is_none());
    assert!(!docs.is_empty());
}
