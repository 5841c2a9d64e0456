//! Platform request/response metadata envelopes

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Request metadata sent by platform clients
///
/// Known fields are typed; anything else (for example `userInfo`) is kept
/// verbatim so the envelope can be forwarded to upstream services unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub api_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ver: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ts: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub did: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub msg_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_token: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub correlation_id: Option<String>,
	/// Additional fields, forwarded as received
	#[serde(flatten)]
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub extra: Map<String, Value>,
}

impl RequestInfo {
	pub fn with_msg_id(msg_id: impl Into<String>) -> Self {
		Self {
			msg_id: Some(msg_id.into()),
			..Self::default()
		}
	}
}

/// Outcome reported in [`ResponseInfo::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
	Successful,
	Failed,
}

/// Response metadata echoed back to platform clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
	pub api_id: String,
	pub ver: String,
	pub ts: i64,
	pub res_msg_id: String,
	pub msg_id: String,
	pub status: ResponseStatus,
}

impl ResponseInfo {
	/// Derive response metadata from the request's metadata
	///
	/// Missing strings become empty, a missing timestamp becomes the current
	/// time in epoch milliseconds, and both message ids echo the request's
	/// `msgId`.
	pub fn from_request_info(request_info: Option<&RequestInfo>, success: bool) -> Self {
		let status = if success {
			ResponseStatus::Successful
		} else {
			ResponseStatus::Failed
		};
		let now = Utc::now().timestamp_millis();

		match request_info {
			Some(info) => {
				let msg_id = info.msg_id.clone().unwrap_or_default();
				Self {
					api_id: info.api_id.clone().unwrap_or_default(),
					ver: info.ver.clone().unwrap_or_default(),
					ts: info.ts.unwrap_or(now),
					res_msg_id: msg_id.clone(),
					msg_id,
					status,
				}
			},
			None => Self {
				api_id: String::new(),
				ver: String::new(),
				ts: now,
				res_msg_id: String::new(),
				msg_id: String::new(),
				status,
			},
		}
	}

	/// Same as [`ResponseInfo::from_request_info`] with a custom `resMsgId`
	pub fn with_message(
		request_info: Option<&RequestInfo>,
		success: bool,
		message: impl Into<String>,
	) -> Self {
		let mut info = Self::from_request_info(request_info, success);
		info.res_msg_id = message.into();
		info
	}
}
