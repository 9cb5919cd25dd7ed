//! Actix-web documentation server.
//!
//! Serves the document produced by [`Documentation::openapi`] as JSON and
//! through Swagger UI. With `swagger.enabled = false` only `/health` is
//! mounted.

pub mod handlers;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swagger_config::Settings;
use swagger_openapi::Documentation;

pub const SWAGGER_UI_PATH: &str = "/swagger-ui/{_:.*}";

/// Endpoints this server documents about itself.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health),
    components(schemas(handlers::HealthResponse)),
    tags((name = "Observability", description = "Health checks"))
)]
pub struct ServerApi;

/// A rendered document and the URL it is served under.
#[derive(Debug, Clone)]
pub struct DocsMount {
    pub url: String,
    pub openapi: OpenApiDoc,
}

impl DocsMount {
    /// `None` when Swagger is disabled.
    pub fn from_documentation(documentation: &Documentation) -> Option<Self> {
        let group_name = documentation.grouped_api()?.group_name.clone();
        let openapi = documentation.openapi(ServerApi::openapi())?;
        Some(Self {
            url: openapi_url(&group_name),
            openapi,
        })
    }
}

/// `/api-docs/openapi.json`, or `/api-docs/{group}/openapi.json` for a named
/// group (slugged so it is a valid path segment).
pub fn openapi_url(group_name: &str) -> String {
    let mut slug = String::with_capacity(group_name.len());
    for c in group_name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "/api-docs/openapi.json".to_string()
    } else {
        format!("/api-docs/{}/openapi.json", slug)
    }
}

pub fn configure_app(cfg: &mut web::ServiceConfig, docs: Option<&DocsMount>) {
    cfg.route("/health", web::get().to(handlers::health));

    if let Some(docs) = docs {
        cfg.service(SwaggerUi::new(SWAGGER_UI_PATH).url(docs.url.clone(), docs.openapi.clone()));
    }
}

fn server_address() -> (String, u16) {
    let host = std::env::var("SWAGGER_SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("SWAGGER_SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    (host, port)
}

/// Resolve configuration, build the descriptors once and serve them.
pub async fn run() -> std::io::Result<()> {
    if let Err(e) = swagger_observability::init_telemetry("swagger-autoconfig") {
        eprintln!("failed to initialize telemetry: {}", e);
    }

    let settings = Settings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    settings.log_summary();

    let documentation = Documentation::configure(&settings.swagger, None);
    let docs = DocsMount::from_documentation(&documentation);
    match &docs {
        Some(docs) => tracing::info!(url = %docs.url, "serving OpenAPI document and Swagger UI"),
        None => tracing::info!("no documentation to serve"),
    }

    let (host, port) = server_address();
    tracing::info!(%host, port, "starting documentation server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| configure_app(cfg, docs.as_ref()))
    })
    .bind((host, port))?
    .run()
    .await
}
