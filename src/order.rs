use std::fmt;
use std::time::Duration;

/// Opaque identifier of a number order, as returned by
/// `POST /orders`. Guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
	pub fn new(id: impl Into<String>) -> Result<Self, BlankOrderId> {
		let id = id.into();
		if id.trim().is_empty() {
			Err(BlankOrderId)
		} else {
			Ok(Self(id))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OrderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("id of the order is blank")]
pub struct BlankOrderId;

/// Controls how [`order_phone_numbers_for_npa_nxx`] waits for Bandwidth to
/// materialize a freshly placed order before fetching its numbers.
///
/// The delay before each lookup grows multiplicatively up to `max_delay`.
/// A policy with `max_attempts: 1` degenerates to a single blind
/// wait-then-fetch.
///
/// [`order_phone_numbers_for_npa_nxx`]: crate::BandwidthClient::order_phone_numbers_for_npa_nxx
#[derive(Debug, Clone)]
pub struct OrderPollPolicy {
	/// Wait before the first lookup.
	pub initial_delay: Duration,
	/// Total number of lookup attempts. Must be at least 1.
	pub max_attempts: u32,
	pub backoff_multiplier: f64,
	pub max_delay: Duration,
}

impl Default for OrderPollPolicy {
	fn default() -> Self {
		Self {
			initial_delay: Duration::from_secs(5),
			max_attempts: 3,
			backoff_multiplier: 2.0,
			max_delay: Duration::from_secs(30),
		}
	}
}

impl OrderPollPolicy {
	pub(crate) fn next_delay(&self, current: Duration) -> Duration {
		current.mul_f64(self.backoff_multiplier).min(self.max_delay)
	}
}
