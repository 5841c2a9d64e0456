//! Writes the GIS Aggregator OpenAPI document to disk
//!
//! ```bash
//! # docs/api/openapi.json
//! cargo run -p gis-api --bin generate_openapi --features openapi
//!
//! # custom location
//! cargo run -p gis-api --bin generate_openapi --features openapi -- out/gis-openapi.json
//! ```
use std::env;
use std::fs;
use std::path::Path;

use gis_api::openapi::ApiDoc;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "docs/api/openapi.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let output_path = env::args()
		.nth(1)
		.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

	if let Some(parent) = Path::new(&output_path).parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	let document = serde_json::to_string_pretty(&ApiDoc::openapi())?;
	fs::write(&output_path, document)?;

	println!("✅ OpenAPI specification written to {}", output_path);
	Ok(())
}
