//! Authentication strategies: the pluggable policy that knows how to obtain credentials for
//! one provider.
//!
//! Every strategy carries an explicit [`ProviderKind`] discriminator; dispatch compares that
//! value and never inspects the strategy's concrete type.

// self
use crate::{
	_prelude::*,
	auth::{CredentialSecret, CredentialSet},
	error::{AuthError, ConfigError},
	provider::{EmploymentHeroStrategy, HumanForceStrategy, MyobStrategy, ProviderKind},
};

/// Boxed future returned by [`AuthStrategy::authenticate`].
pub type AuthFuture<'a> = Pin<Box<dyn Future<Output = Result<CredentialSet, AuthError>> + 'a + Send>>;

/// Produces provider credentials on demand.
///
/// Strategies are immutable once built and shared (via `Arc`) between the caller and the
/// service they resolve to.
pub trait AuthStrategy
where
	Self: Send + Sync,
{
	/// Discriminator used to pick the matching service.
	fn provider(&self) -> ProviderKind;

	/// Acquires a fresh [`CredentialSet`]; called once per service operation.
	fn authenticate(&self) -> AuthFuture<'_>;
}

/// Opaque initialization parameters accepted by strategy constructors.
///
/// Every field is optional; which ones a provider needs is up to its real client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
	/// API key for authentication.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_key: Option<CredentialSecret>,
	/// Access token for API requests.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_token: Option<CredentialSecret>,
	/// Refresh token for renewing access.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<CredentialSecret>,
}
impl StrategyConfig {
	/// Sets the API key.
	pub fn with_api_key(mut self, value: impl Into<String>) -> Self {
		self.api_key = Some(CredentialSecret::new(value));

		self
	}

	/// Sets the access token.
	pub fn with_access_token(mut self, value: impl Into<String>) -> Self {
		self.access_token = Some(CredentialSecret::new(value));

		self
	}

	/// Sets the refresh token.
	pub fn with_refresh_token(mut self, value: impl Into<String>) -> Self {
		self.refresh_token = Some(CredentialSecret::new(value));

		self
	}

	/// Returns `true` when no credential material was supplied.
	pub fn is_empty(&self) -> bool {
		self.api_key.is_none() && self.access_token.is_none() && self.refresh_token.is_none()
	}

	/// Bearer material to expose on issued credentials: the access token, else the API key.
	pub fn bearer(&self) -> Option<CredentialSecret> {
		self.access_token.as_ref().or(self.api_key.as_ref()).cloned()
	}

	/// Issues a credential set for the given identity, carrying this config's bearer.
	pub(crate) fn issue(
		&self,
		tenant_id: &str,
		user_id: &str,
		display_name: &str,
	) -> Result<CredentialSet, AuthError> {
		Ok(CredentialSet::new(tenant_id, user_id, display_name)?.with_bearer(self.bearer()))
	}
}

/// Strategy that hands out a fixed credential set under any discriminator.
///
/// Useful for providers registered at runtime through
/// [`ServiceMappings`](crate::dispatch::ServiceMappings) and for local development.
#[derive(Clone, Debug)]
pub struct StaticStrategy {
	provider: ProviderKind,
	credentials: CredentialSet,
}
impl StaticStrategy {
	/// Creates a strategy that always returns `credentials` for `provider`.
	pub fn new(provider: ProviderKind, credentials: CredentialSet) -> Self {
		Self { provider, credentials }
	}
}
impl AuthStrategy for StaticStrategy {
	fn provider(&self) -> ProviderKind {
		self.provider.clone()
	}

	fn authenticate(&self) -> AuthFuture<'_> {
		let credentials = self.credentials.clone();

		Box::pin(async move { Ok(credentials) })
	}
}

/// Builds one of the built-in strategies from a discriminator label and its configuration.
///
/// Fails with [`ConfigError::MissingDiscriminator`] for an absent or blank label,
/// [`Error::UnsupportedStrategy`] for labels outside the built-in set, and
/// [`ConfigError::MissingConfig`] when no configuration was supplied at all.
pub fn make_strategy(
	discriminator: Option<&str>,
	config: Option<StrategyConfig>,
) -> Result<Arc<dyn AuthStrategy>> {
	let label = discriminator
		.map(str::trim)
		.filter(|label| !label.is_empty())
		.ok_or(ConfigError::MissingDiscriminator)?;
	let provider = ProviderKind::from_str(label)?;
	let require = |config: Option<StrategyConfig>| {
		config.ok_or_else(|| ConfigError::MissingConfig { provider: provider.clone() })
	};
	let strategy: Arc<dyn AuthStrategy> = match &provider {
		ProviderKind::EmploymentHero => Arc::new(EmploymentHeroStrategy::new(require(config)?)),
		ProviderKind::HumanForce => Arc::new(HumanForceStrategy::new(require(config)?)),
		ProviderKind::Myob => Arc::new(MyobStrategy::new(require(config)?)),
		ProviderKind::Custom(id) =>
			return Err(Error::UnsupportedStrategy { discriminator: id.to_string() }),
	};

	Ok(strategy)
}
