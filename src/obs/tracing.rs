// self
use crate::{_prelude::*, auth::CredentialSet, provider::ProviderKind, service::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by authenticated calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provider + operation.
	pub fn new(provider: &ProviderKind, operation: Operation) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"timesheet_broker.call",
				provider = provider.as_str(),
				operation = operation.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (provider, operation);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event once a strategy has issued credentials.
pub fn trace_credentials(credentials: &CredentialSet) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			tenant_id = %credentials.tenant_id,
			user_id = %credentials.user_id,
			"credentials acquired"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = credentials;
	}
}

/// Emits a debug event for a failure about to be surfaced to the caller.
pub fn trace_failure(error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(error = %error, "provider call failed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}
