//! WMS and WFS layer reference URLs
//!
//! URLs are rendered as literal strings against a fixed world bounding box;
//! no layer is provisioned on the map server.

/// Default GeoServer base URL
pub const DEFAULT_GEOSERVER_BASE_URL: &str = "http://localhost:8080/geoserver";

const WMS_VERSION: &str = "1.1.0";
const WMS_BBOX: &str = "-180,-90,180,90";
const WMS_WIDTH: u32 = 768;
const WMS_HEIGHT: u32 = 384;
const WMS_SRS: &str = "EPSG:4326";

const WFS_VERSION: &str = "1.0.0";
const WFS_MAX_FEATURES: u32 = 1000;
const WFS_OUTPUT_FORMAT: &str = "application/json";

/// Renders layer URLs for a configured map server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerUrlBuilder {
	base_url: String,
}

impl Default for LayerUrlBuilder {
	fn default() -> Self {
		Self::new(DEFAULT_GEOSERVER_BASE_URL)
	}
}

impl LayerUrlBuilder {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Layer name for a module and tenant, e.g. `property_pg.citya`
	pub fn layer_name(module: &str, tenant_id: &str) -> String {
		format!("{}_{}", module, tenant_id)
	}

	pub fn wms_url(&self, module: &str, tenant_id: &str) -> String {
		format!(
			"{}/wms?service=WMS&version={}&request=GetMap&layers={}&bbox={}&width={}&height={}&srs={}",
			self.base_url,
			WMS_VERSION,
			Self::layer_name(module, tenant_id),
			WMS_BBOX,
			WMS_WIDTH,
			WMS_HEIGHT,
			WMS_SRS
		)
	}

	pub fn wfs_url(&self, module: &str, tenant_id: &str) -> String {
		format!(
			"{}/wfs?service=WFS&version={}&request=GetFeature&typeName={}&maxFeatures={}&outputFormat={}",
			self.base_url,
			WFS_VERSION,
			Self::layer_name(module, tenant_id),
			WFS_MAX_FEATURES,
			WFS_OUTPUT_FORMAT
		)
	}
}
