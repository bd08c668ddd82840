// self
use crate::{obs::CallOutcome, provider::ProviderKind, service::Operation};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(provider: &ProviderKind, operation: Operation, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"timesheet_broker_call_total",
			"provider" => provider.to_string(),
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, operation, outcome);
	}
}
