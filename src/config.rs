use secrecy::SecretString;

/// Static configuration for the Bandwidth API, normally sourced from the
/// application's secrets store. Immutable for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct BandwidthConfig {
	/// Hostname of the Bandwidth dashboard, without scheme.
	pub host: String,
	/// API version segment, e.g. `1.0`.
	pub version: String,
	pub account_id: String,
	pub username: String,
	pub password: SecretString,
	/// The site (sub-account) that placed orders are attached to.
	pub site_id: String,
}
