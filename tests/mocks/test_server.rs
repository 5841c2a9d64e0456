//! Aggregator server spawned on an ephemeral port

use axum::Router;
use gis_aggregator::{DataProvider, GisAggregatorBuilder, Settings};
use tokio::task::JoinHandle;

pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Server whose property module talks to `upstream_url`
	pub async fn spawn_with_upstream(
		upstream_url: &str,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let settings = super::PropertyFixtures::settings_for(upstream_url);
		Self::spawn_with_settings(settings).await
	}

	pub async fn spawn_with_settings(
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = GisAggregatorBuilder::new()
			.with_settings(settings)
			.start()
			.await?;
		Self::spawn_server_with_app(app).await
	}

	/// Server with the property module disabled and `provider` registered instead
	pub async fn spawn_with_provider(
		provider: Box<dyn DataProvider>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let mut settings = Settings::default();
		settings.modules.property.enabled = false;

		let (app, _state) = GisAggregatorBuilder::new()
			.with_settings(settings)
			.with_provider(provider)
			.start()
			.await?;
		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
