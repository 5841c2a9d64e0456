//! Service startup logging for the GIS Aggregator

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	// Root package name, not this crate's
	let service_name = "gis-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== GIS Aggregator Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var(crate::loader::CONFIG_PATH_ENV) {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);

	info!("🎯 Starting GIS aggregator initialization...");
}

/// Logs the module and map server configuration in effect
pub fn log_module_configuration(settings: &Settings) {
	info!("🗺️ GeoServer: {}", settings.geoserver.base_url);

	let property = &settings.modules.property;
	if property.enabled {
		info!(
			"🏠 Module 'property': host from {}, path {}, timeout {}ms, criteria policy {:?}",
			property.host.description(),
			property.search_path,
			property.timeout_ms,
			property.criteria_policy
		);
	} else {
		info!("🏠 Module 'property': disabled");
	}
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 GIS Aggregator Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ GIS Aggregator Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
