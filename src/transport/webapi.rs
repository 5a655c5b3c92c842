use log::{debug, trace};
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};

use super::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::BandwidthConfig;

/// [`Transport`] backed by a blocking reqwest client. All requests go out
/// over TLS with HTTP basic auth; POST bodies are sent as
/// `application/xml`.
#[derive(Debug)]
pub struct WebApiTransport {
	client: reqwest::blocking::Client,
	host: String,
	username: String,
	password: SecretString,
}

impl WebApiTransport {
	#[must_use]
	pub fn new(config: &BandwidthConfig) -> Self {
		Self {
			client: reqwest::blocking::Client::new(),
			host: config.host.clone(),
			username: config.username.clone(),
			password: config.password.clone(),
		}
	}
}

impl Transport for WebApiTransport {
	fn send_request(&self, req: ApiRequest) -> Result<ApiResponse, TransportError> {
		let url = format!("https://{}{}", self.host, req.path());
		debug!("HTTP Request: {} {}", req.method(), url);

		let mut builder = self
			.client
			.request(req.method().clone(), &url)
			.basic_auth(&self.username, Some(self.password.expose_secret()));
		if !req.query().is_empty() {
			builder = builder.query(req.query());
		}
		if let Some(body) = req.body() {
			builder = builder
				.header(CONTENT_TYPE, "application/xml")
				.body(body.to_owned());
		}

		let resp = builder.send()?;
		let status = resp.status().as_u16();
		debug!("Response HTTP status: {}", status);
		let body = resp.text()?;
		trace!("Response body: {}", body);

		Ok(ApiResponse { status, body })
	}
}
