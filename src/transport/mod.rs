pub mod webapi;

pub use webapi::WebApiTransport;

/// Performs a single HTTP call against the Bandwidth API.
///
/// Implementations own authentication and TLS; callers only describe the
/// request. Fetching the body eagerly keeps the trait trivially mockable.
pub trait Transport {
	fn send_request(&self, req: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// A fully specified outbound request: method, path relative to the API
/// host, query pairs and an optional XML body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
	method: reqwest::Method,
	path: String,
	query: Vec<(String, String)>,
	body: Option<String>,
}

impl ApiRequest {
	#[must_use]
	pub fn get(path: impl Into<String>) -> Self {
		Self {
			method: reqwest::Method::GET,
			path: path.into(),
			query: Vec::new(),
			body: None,
		}
	}

	#[must_use]
	pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			method: reqwest::Method::POST,
			path: path.into(),
			query: Vec::new(),
			body: Some(body.into()),
		}
	}

	#[must_use]
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));
		self
	}

	pub fn method(&self) -> &reqwest::Method {
		&self.method
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn query(&self) -> &[(String, String)] {
		&self.query
	}

	pub fn body(&self) -> Option<&str> {
		self.body.as_deref()
	}
}

/// Status code and body of a completed call, before interpretation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
	pub status: u16,
	pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("network failure: {0}")]
	Network(#[from] reqwest::Error),
}
