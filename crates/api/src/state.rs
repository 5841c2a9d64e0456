use std::sync::Arc;

use gis_service::SearchServiceTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub search_service: Arc<dyn SearchServiceTrait>,
}

impl AppState {
	pub fn new(search_service: Arc<dyn SearchServiceTrait>) -> Self {
		Self { search_service }
	}
}
