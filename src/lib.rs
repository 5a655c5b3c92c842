//! Client library for Bandwidth's telephone number provisioning API.
//!
//! The entry point is [`BandwidthClient`], which is generic over a
//! [`Transport`] so that the HTTP layer can be swapped out (or scripted in
//! tests). [`WebApiTransport`] is the reqwest-backed implementation used in
//! production.
//!
//! ```no_run
//! use bandwidth_api::{BandwidthClient, BandwidthConfig, WebApiTransport};
//! use secrecy::SecretString;
//!
//! let config = BandwidthConfig {
//! 	host: "dashboard.bandwidth.com".into(),
//! 	version: "1.0".into(),
//! 	account_id: "1234567".into(),
//! 	username: "apiuser".into(),
//! 	password: SecretString::new("hunter2".into()),
//! 	site_id: "8901".into(),
//! };
//! let transport = WebApiTransport::new(&config);
//! let client = BandwidthClient::new(config, transport);
//! let blocks = client.availability_for_npa("212")?;
//! # Ok::<(), bandwidth_api::ApiError>(())
//! ```

pub use client::{ApiError, BandwidthClient, NpaNxxAvailability};
pub use config::BandwidthConfig;
pub use metrics::{LogMetrics, MetricsSink};
pub use order::{BlankOrderId, OrderId, OrderPollPolicy};
pub use phone_number::{InvalidPhoneNumber, PhoneNumber};
pub use transport::{ApiRequest, ApiResponse, Transport, TransportError, WebApiTransport};

#[macro_use]
extern crate lazy_static;

pub mod api_responses;
mod client;
mod config;
mod metrics;
mod order;
mod phone_number;
pub mod transport;
