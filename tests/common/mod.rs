use std::path::PathBuf;

use swagger_autoconfig::config::{Contact, License, SwaggerProperties};

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Properties the scenarios customize from.
#[allow(dead_code)]
pub fn custom_properties() -> SwaggerProperties {
    SwaggerProperties {
        enabled: true,
        group_name: "test group".to_string(),
        paths: vec!["/test/path".to_string()],
        title: "test title".to_string(),
        description: "test description".to_string(),
        terms_of_service_url: "http://test.tos.url".to_string(),
        contact: Contact {
            name: "test contact name".to_string(),
            url: "http://test.contact.url".to_string(),
            email: "test@domain.com".to_string(),
        },
        license: License {
            r#type: "test license type".to_string(),
            url: "http://test.lic.url".to_string(),
        },
        ..Default::default()
    }
}
