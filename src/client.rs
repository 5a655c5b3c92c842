use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::thread;

use crate::api_responses::{
	self, CompletedNumbers, OrderEncodeError, OrderRequest, OrderResponse,
	SearchResultForAvailableNpaNxx,
};
use crate::config::BandwidthConfig;
use crate::metrics::{LogMetrics, MetricsSink};
use crate::order::{OrderId, OrderPollPolicy};
use crate::phone_number::PhoneNumber;
use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};

const PARTIAL_RESULTS_ERROR_CODE: &str = "5017";
const EMPTY_RESULTS_ERROR_CODE: &str = "5018";

// Bandwidth's wording when an area code has no entry in its copy of the
// LERG; code 4000 alone is not specific enough to identify the condition.
const UNKNOWN_NPA_ERROR_CODE: &str = "4000";
const UNKNOWN_NPA_DESCRIPTION: &str = "not present as a valid entry in our system";

/// One available NPA-NXX block, as reported by the availability search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpaNxxAvailability {
	pub nxx: String,
	pub quantity: u32,
}

/// Business-level outcome signaled inside an order lookup body, distinct
/// from the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OrderErrorCode {
	/// The order produced no numbers.
	Empty,
	/// The order produced fewer numbers than requested.
	Partial,
	Unknown(String),
}

impl From<&str> for OrderErrorCode {
	fn from(code: &str) -> Self {
		match code {
			EMPTY_RESULTS_ERROR_CODE => OrderErrorCode::Empty,
			PARTIAL_RESULTS_ERROR_CODE => OrderErrorCode::Partial,
			other => OrderErrorCode::Unknown(other.to_owned()),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("transport failure: {0}")]
	Transport(#[from] TransportError),

	#[error(transparent)]
	RequestEncoding(#[from] OrderEncodeError),

	#[error("unexpected http status\nhttp status code: {status}\nresponse body: {body}")]
	UnexpectedStatus { status: u16, body: String },

	#[error("{element} not found in response\nhttp status code: {status}\nresponse body: {body}")]
	MissingElement {
		element: String,
		status: u16,
		body: String,
	},

	#[error("unable to parse response body as xml: {message}\nhttp status code: {status}\nresponse body: {body}")]
	MalformedXml {
		message: String,
		status: u16,
		body: String,
	},

	#[error("id of the order is blank\nhttp status code: {status}\nresponse body: {body}")]
	BlankOrderId { status: u16, body: String },

	#[error("Unexpected multiple error codes\nhttp status code: {status}\nresponse body: {body}")]
	MultipleErrorCodes { status: u16, body: String },

	#[error("Unexpected error code\nhttp status code: {status}\nresponse body: {body}")]
	UnexpectedErrorCode {
		code: String,
		status: u16,
		body: String,
	},

	#[error("Invalid phone number in response\nhttp status code: {status}\nresponse body: {body}")]
	InvalidPhoneNumber {
		number: String,
		status: u16,
		body: String,
	},
}

impl ApiError {
	fn unexpected_status(resp: &ApiResponse) -> Self {
		ApiError::UnexpectedStatus {
			status: resp.status,
			body: resp.body.clone(),
		}
	}

	fn missing_element(element: &str, resp: &ApiResponse) -> Self {
		ApiError::MissingElement {
			element: element.to_owned(),
			status: resp.status,
			body: resp.body.clone(),
		}
	}

	/// HTTP status of the offending response, when there was one.
	pub fn status(&self) -> Option<u16> {
		match self {
			ApiError::Transport(_) | ApiError::RequestEncoding(_) => None,
			ApiError::UnexpectedStatus { status, .. }
			| ApiError::MissingElement { status, .. }
			| ApiError::MalformedXml { status, .. }
			| ApiError::BlankOrderId { status, .. }
			| ApiError::MultipleErrorCodes { status, .. }
			| ApiError::UnexpectedErrorCode { status, .. }
			| ApiError::InvalidPhoneNumber { status, .. } => Some(*status),
		}
	}

	/// Raw body of the offending response, when there was one.
	pub fn response_body(&self) -> Option<&str> {
		match self {
			ApiError::Transport(_) | ApiError::RequestEncoding(_) => None,
			ApiError::UnexpectedStatus { body, .. }
			| ApiError::MissingElement { body, .. }
			| ApiError::MalformedXml { body, .. }
			| ApiError::BlankOrderId { body, .. }
			| ApiError::MultipleErrorCodes { body, .. }
			| ApiError::UnexpectedErrorCode { body, .. }
			| ApiError::InvalidPhoneNumber { body, .. } => Some(body),
		}
	}
}

/// Client for Bandwidth's number availability and ordering endpoints.
///
/// Stateless between calls; the only thing instances share is the injected
/// [`BandwidthConfig`]. Each operation emits exactly one success or failure
/// counter on the configured [`MetricsSink`].
pub struct BandwidthClient<T>
where
	T: Transport,
{
	config: BandwidthConfig,
	transport: T,
	metrics: Box<dyn MetricsSink>,
	poll_policy: OrderPollPolicy,
}

impl<T> BandwidthClient<T>
where
	T: Transport,
{
	/// Creates a client that logs its metrics and polls placed orders with
	/// the default [`OrderPollPolicy`].
	#[must_use]
	pub fn new(config: BandwidthConfig, transport: T) -> Self {
		Self {
			config,
			transport,
			metrics: Box::new(LogMetrics),
			poll_policy: OrderPollPolicy::default(),
		}
	}

	#[must_use]
	pub fn with_metrics(mut self, metrics: impl MetricsSink + 'static) -> Self {
		self.metrics = Box::new(metrics);
		self
	}

	#[must_use]
	pub fn with_poll_policy(mut self, policy: OrderPollPolicy) -> Self {
		self.poll_policy = policy;
		self
	}

	/// Available NPA-NXX blocks for an area code.
	///
	/// An area code Bandwidth does not recognize at all comes back as a 400
	/// with a specific error; that case is logged, counted and treated as
	/// no availability rather than a failure.
	pub fn availability_for_npa(&self, npa: &str) -> Result<Vec<NpaNxxAvailability>, ApiError> {
		self.observing("availability_for_npa", |client| {
			client.availability_inner(npa)
		})
	}

	/// Places an order for `quantity` numbers in an NPA-NXX block and
	/// returns its id. The order is fulfilled asynchronously on the
	/// Bandwidth side; see [`Self::phone_numbers_for_order`].
	pub fn place_order_for_npa_nxx(
		&self,
		npa_nxx: &str,
		quantity: u32,
	) -> Result<OrderId, ApiError> {
		self.observing("place_order_for_npa_nxx", |client| {
			client.place_order_inner(npa_nxx, quantity)
		})
	}

	/// The numbers a completed order produced. Empty when Bandwidth could
	/// not fill the order at all (error code 5018); partially filled orders
	/// (5017) return whatever was provisioned.
	pub fn phone_numbers_for_order(&self, order_id: &OrderId) -> Result<Vec<PhoneNumber>, ApiError> {
		self.observing("phone_numbers_for_order", |client| {
			client.phone_numbers_inner(order_id)
		})
	}

	/// Places an order and fetches the numbers it produced, waiting between
	/// the two calls according to the configured [`OrderPollPolicy`] since
	/// Bandwidth materializes orders asynchronously. Lookup attempts that
	/// fail are retried until the policy's attempts are exhausted; the last
	/// error propagates.
	pub fn order_phone_numbers_for_npa_nxx(
		&self,
		npa_nxx: &str,
		quantity: u32,
	) -> Result<Vec<PhoneNumber>, ApiError> {
		let order_id = self.place_order_for_npa_nxx(npa_nxx, quantity)?;
		let mut delay = self.poll_policy.initial_delay;
		let mut attempt = 1;
		loop {
			thread::sleep(delay);
			match self.phone_numbers_for_order(&order_id) {
				Ok(numbers) => return Ok(numbers),
				Err(err) if attempt < self.poll_policy.max_attempts => {
					debug!("order {} not ready on attempt {}: {}", order_id, attempt, err);
					delay = self.poll_policy.next_delay(delay);
					attempt += 1;
				}
				Err(err) => return Err(err),
			}
		}
	}

	fn observing<R>(
		&self,
		operation: &str,
		call: impl FnOnce(&Self) -> Result<R, ApiError>,
	) -> Result<R, ApiError> {
		let result = call(self);
		match &result {
			Ok(_) => self
				.metrics
				.increment(&format!("bandwidth_api.{}.success", operation)),
			Err(_) => self
				.metrics
				.increment(&format!("bandwidth_api.{}.failure", operation)),
		}
		result
	}

	fn availability_inner(&self, npa: &str) -> Result<Vec<NpaNxxAvailability>, ApiError> {
		let req =
			ApiRequest::get(self.resource_path("availableNpaNxx")).with_query("areaCode", npa);
		let resp = self.transport.send_request(req)?;
		match resp.status {
			200 => {
				let result: SearchResultForAvailableNpaNxx =
					parse_response("SearchResultForAvailableNpaNxx", &resp)?;
				let list = result
					.available_npa_nxx_list
					.ok_or_else(|| ApiError::missing_element("AvailableNpaNxxList", &resp))?;
				list.entries
					.into_iter()
					.map(|entry| {
						let nxx = entry
							.nxx
							.ok_or_else(|| ApiError::missing_element("Nxx", &resp))?;
						let quantity = entry
							.quantity
							.ok_or_else(|| ApiError::missing_element("Quantity", &resp))?;
						Ok(NpaNxxAvailability { nxx, quantity })
					})
					.collect()
			}
			400 => {
				let result: SearchResultForAvailableNpaNxx =
					parse_response("SearchResultForAvailableNpaNxx", &resp)?;
				let error = result
					.error
					.ok_or_else(|| ApiError::missing_element("Error", &resp))?;
				let code = error
					.code
					.ok_or_else(|| ApiError::missing_element("Code", &resp))?;
				let description = error
					.description
					.ok_or_else(|| ApiError::missing_element("Description", &resp))?;
				if code == UNKNOWN_NPA_ERROR_CODE
					&& description.contains(UNKNOWN_NPA_DESCRIPTION)
				{
					self.metrics
						.increment("bandwidth_api.availability_for_npa.invalid_npa");
					warn!(
						"the npa '{}' is not present in bandwidth as a valid entry",
						npa
					);
					Ok(Vec::new())
				} else {
					Err(ApiError::unexpected_status(&resp))
				}
			}
			_ => Err(ApiError::unexpected_status(&resp)),
		}
	}

	fn place_order_inner(&self, npa_nxx: &str, quantity: u32) -> Result<OrderId, ApiError> {
		let body = OrderRequest::new(self.config.site_id.clone(), npa_nxx, quantity).to_xml()?;
		let req = ApiRequest::post(self.resource_path("orders"), body);
		let resp = self.transport.send_request(req)?;
		if resp.status != 201 {
			return Err(ApiError::unexpected_status(&resp));
		}

		let response: OrderResponse = parse_response("OrderResponse", &resp)?;
		let order = response
			.order
			.ok_or_else(|| ApiError::missing_element("Order", &resp))?;
		let id = order
			.id
			.ok_or_else(|| ApiError::missing_element("id", &resp))?;
		OrderId::new(id).map_err(|_| ApiError::BlankOrderId {
			status: resp.status,
			body: resp.body,
		})
	}

	fn phone_numbers_inner(&self, order_id: &OrderId) -> Result<Vec<PhoneNumber>, ApiError> {
		let req = ApiRequest::get(self.resource_path(&format!("orders/{}", order_id)));
		let resp = self.transport.send_request(req)?;
		if resp.status != 200 {
			return Err(ApiError::unexpected_status(&resp));
		}

		let response: OrderResponse = parse_response("OrderResponse", &resp)?;
		let codes: Vec<String> = response
			.error_list
			.map(|list| {
				list.errors
					.into_iter()
					.filter_map(|error| error.code)
					.collect()
			})
			.unwrap_or_default();
		// A response carrying more than one error code has never been
		// observed; refuse to guess which one governs.
		if codes.len() > 1 {
			return Err(ApiError::MultipleErrorCodes {
				status: resp.status,
				body: resp.body,
			});
		}

		match codes
			.into_iter()
			.next()
			.map(|code| OrderErrorCode::from(code.as_str()))
		{
			Some(OrderErrorCode::Empty) => Ok(Vec::new()),
			None | Some(OrderErrorCode::Partial) => {
				parse_completed_numbers(response.completed_numbers, &resp)
			}
			Some(OrderErrorCode::Unknown(code)) => Err(ApiError::UnexpectedErrorCode {
				code,
				status: resp.status,
				body: resp.body,
			}),
		}
	}

	fn resource_path(&self, resource: &str) -> String {
		format!(
			"/v{}/accounts/{}/{}",
			self.config.version, self.config.account_id, resource
		)
	}
}

fn parse_completed_numbers(
	completed: Option<CompletedNumbers>,
	resp: &ApiResponse,
) -> Result<Vec<PhoneNumber>, ApiError> {
	let completed = completed.ok_or_else(|| ApiError::missing_element("CompletedNumbers", resp))?;
	if completed.telephone_numbers.is_empty() {
		return Err(ApiError::missing_element("FullNumber", resp));
	}

	completed
		.telephone_numbers
		.into_iter()
		.map(|number| {
			let full_number = number
				.full_number
				.ok_or_else(|| ApiError::missing_element("FullNumber", resp))?;
			PhoneNumber::new(full_number).map_err(|err| ApiError::InvalidPhoneNumber {
				number: err.0,
				status: resp.status,
				body: resp.body.clone(),
			})
		})
		.collect()
}

fn parse_response<T>(root: &str, resp: &ApiResponse) -> Result<T, ApiError>
where
	T: DeserializeOwned,
{
	if api_responses::root_element_name(&resp.body).as_deref() != Some(root) {
		return Err(ApiError::missing_element(root, resp));
	}
	quick_xml::de::from_str(&resp.body).map_err(|e| ApiError::MalformedXml {
		message: e.to_string(),
		status: resp.status,
		body: resp.body.clone(),
	})
}
