//! Broker-level error types shared across strategies, services, and dispatch.

// self
use crate::{
	_prelude::*,
	auth::IdentifierError,
	provider::ProviderKind,
	service::{Operation, TimesheetId},
};

/// Broker-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical broker error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Strategy credential acquisition failed.
	#[error(transparent)]
	Authentication(#[from] AuthError),

	/// No service mapping exists for the strategy's discriminator.
	#[error("Unsupported strategy `{discriminator}`.")]
	UnsupportedStrategy {
		/// Discriminator label that failed to resolve.
		discriminator: String,
	},
	/// Contract operation invoked on a service that does not override it.
	#[error("Operation `{operation}` is not implemented by provider `{provider}`.")]
	NotImplemented {
		/// Provider whose service lacks the operation.
		provider: ProviderKind,
		/// Operation that was invoked.
		operation: Operation,
	},
	/// Provider could not resolve the requested timesheet.
	#[error("Timesheet {id} was not found at provider `{provider}`.")]
	NotFound {
		/// Provider that was queried.
		provider: ProviderKind,
		/// Identifier that failed to resolve.
		id: TimesheetId,
	},
	/// Failure raised inside an authenticated call, tagged with where it happened.
	#[error("Provider `{provider}` failed during `{operation}`: {source}")]
	ApiCall {
		/// Provider that served the call.
		provider: ProviderKind,
		/// Operation that failed.
		operation: Operation,
		/// Underlying failure (authentication or operation body).
		#[source]
		source: Box<Error>,
	},
}
impl Error {
	/// Wraps a failure with the provider/operation context of an authenticated call.
	pub fn api_call(provider: ProviderKind, operation: Operation, source: Error) -> Self {
		Self::ApiCall { provider, operation, source: Box::new(source) }
	}

	/// Returns the innermost error, unwrapping any [`Error::ApiCall`] layers.
	pub fn root(&self) -> &Error {
		let mut current = self;

		while let Self::ApiCall { source, .. } = current {
			current = source;
		}

		current
	}

	/// Whether the root cause is [`Error::NotFound`].
	pub fn is_not_found(&self) -> bool {
		matches!(self.root(), Self::NotFound { .. })
	}

	/// Whether the root cause is [`Error::NotImplemented`].
	pub fn is_not_implemented(&self) -> bool {
		matches!(self.root(), Self::NotImplemented { .. })
	}

	/// Whether the root cause is an [`AuthError`].
	pub fn is_authentication(&self) -> bool {
		matches!(self.root(), Self::Authentication(_))
	}
}

/// Configuration and construction failures raised by the broker.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// Selector was asked to resolve without a strategy.
	#[error("Strategy is required.")]
	MissingStrategy,
	/// Strategy construction was attempted without a provider discriminator.
	#[error("Provider discriminator is required.")]
	MissingDiscriminator,
	/// Strategy construction was attempted without any configuration.
	#[error("Strategy configuration for `{provider}` is required.")]
	MissingConfig {
		/// Provider whose strategy could not be built.
		provider: ProviderKind,
	},
	/// Two registry entries claim the same discriminator.
	#[error("Provider `{provider}` is mapped more than once.")]
	DuplicateMapping {
		/// Discriminator that appeared twice.
		provider: ProviderKind,
	},
	/// A discriminator or identity label failed validation.
	#[error("Identifier is invalid.")]
	InvalidIdentifier(#[from] IdentifierError),
}

/// Credential acquisition failures raised by [`AuthStrategy`](crate::auth::AuthStrategy)
/// implementations.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum AuthError {
	/// Provider refused to issue credentials.
	#[error("Provider `{provider}` denied authentication: {reason}.")]
	Denied {
		/// Provider that rejected the request.
		provider: ProviderKind,
		/// Provider- or strategy-supplied reason string.
		reason: String,
	},
	/// Provider returned an identity that fails identifier validation.
	#[error("Provider returned an invalid identity.")]
	InvalidIdentity(#[from] IdentifierError),
}
