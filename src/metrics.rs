use log::debug;

/// Counter sink for operation outcome metrics.
///
/// Every client operation increments `bandwidth_api.{operation}.success` or
/// `bandwidth_api.{operation}.failure` exactly once, plus
/// `bandwidth_api.availability_for_npa.invalid_npa` for the swallowed
/// unknown-NPA case. Implement this to forward counters to statsd or
/// whatever backend the host application uses.
pub trait MetricsSink {
	fn increment(&self, name: &str);
}

/// Default sink that emits counter names on the log facade.
#[derive(Debug, Default)]
pub struct LogMetrics;

impl MetricsSink for LogMetrics {
	fn increment(&self, name: &str) {
		debug!("metric increment: {}", name);
	}
}
