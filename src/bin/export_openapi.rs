use std::path::PathBuf;

use swagger_autoconfig::config::Settings;
use swagger_autoconfig::openapi::{Documentation, StaticVersion, SwaggerVersion};
use swagger_autoconfig::server::ServerApi;
use utoipa::OpenApi;

fn default_output_path() -> PathBuf {
    PathBuf::from("docs/openapi.json")
}

/// `export_openapi [output] [api-version]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().map(PathBuf::from).unwrap_or_else(default_output_path);
    let version = args.next().map(StaticVersion::new);

    let settings = Settings::load()?;
    let documentation = Documentation::configure(
        &settings.swagger,
        version.as_ref().map(|v| v as &dyn SwaggerVersion),
    );

    let openapi = documentation
        .openapi(ServerApi::openapi())
        .ok_or("swagger documentation is disabled (set swagger.enabled = true)")?;
    let json = serde_json::to_string_pretty(&openapi)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&output_path, json)?;

    eprintln!(
        "Wrote OpenAPI spec to {}",
        output_path.canonicalize().unwrap_or(output_path).display()
    );

    Ok(())
}
