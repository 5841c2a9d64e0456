//! In-process stand-in for the property registry service

use std::sync::{Arc, Mutex};

use axum::{
	extract::{RawQuery, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::post,
	Router,
};
use serde_json::Value;
use tokio::task::JoinHandle;

pub const SEARCH_PATH: &str = "/property-services/property/_search";

/// How the mock answers every search call
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub enum UpstreamBehavior {
	/// 200 with this JSON body
	Respond(Value),
	/// Empty body with this status
	Status(u16),
	/// 200 with this raw (possibly non-JSON) body
	Raw(String),
}

/// One call received by the mock
#[derive(Clone, Debug)]
pub struct RecordedRequest {
	/// Query pairs in the order they were sent
	pub query: Vec<(String, String)>,
	pub body: Value,
}

#[allow(dead_code)]
impl RecordedRequest {
	pub fn param(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn keys(&self) -> Vec<&str> {
		self.query.iter().map(|(k, _)| k.as_str()).collect()
	}
}

#[derive(Clone)]
struct MockState {
	behavior: UpstreamBehavior,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockPropertyService {
	pub base_url: String,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
	handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockPropertyService {
	pub async fn spawn(behavior: UpstreamBehavior) -> Self {
		let requests = Arc::new(Mutex::new(Vec::new()));
		let state = MockState {
			behavior,
			requests: Arc::clone(&requests),
		};
		let app = Router::new()
			.route(SEARCH_PATH, post(search))
			.with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind mock upstream port");
		let addr = listener.local_addr().unwrap();
		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Self {
			base_url: format!("http://{}:{}", addr.ip(), addr.port()),
			requests,
			handle,
		}
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests()
			.pop()
			.expect("mock upstream received no request")
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn search(
	State(state): State<MockState>,
	RawQuery(query): RawQuery,
	body: String,
) -> Response {
	let url = reqwest::Url::parse(&format!("http://upstream/?{}", query.unwrap_or_default()))
		.expect("valid query string");
	let recorded = RecordedRequest {
		query: url
			.query_pairs()
			.map(|(k, v)| (k.into_owned(), v.into_owned()))
			.collect(),
		body: serde_json::from_str(&body).unwrap_or(Value::Null),
	};
	state.requests.lock().unwrap().push(recorded);

	match state.behavior {
		UpstreamBehavior::Respond(value) => (StatusCode::OK, axum::Json(value)).into_response(),
		UpstreamBehavior::Status(code) => StatusCode::from_u16(code)
			.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
			.into_response(),
		UpstreamBehavior::Raw(raw) => (StatusCode::OK, raw).into_response(),
	}
}
