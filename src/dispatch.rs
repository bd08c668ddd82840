//! Provider selection: maps a strategy's discriminator to the service that serves it.
//!
//! [`ServiceMappings`] is the registry (discriminator -> constructor); [`ProviderSelector`]
//! owns one behind a read-mostly lock and builds a fresh service per [`resolve`] call.
//! Lookups compare [`ProviderKind`] values, never strategy types.
//!
//! [`resolve`]: ProviderSelector::resolve

// self
use crate::{
	_prelude::*,
	auth::AuthStrategy,
	error::ConfigError,
	provider::{
		EmploymentHeroTimesheetService, HumanForceTimesheetService, MyobTimesheetService,
		ProviderKind,
	},
	service::TimesheetService,
};

/// Builds a service bound to the given strategy.
pub type ServiceConstructor =
	Arc<dyn Fn(Arc<dyn AuthStrategy>) -> Box<dyn TimesheetService> + Send + Sync>;

/// Registry of service constructors keyed by provider discriminator.
///
/// Holds at most one constructor per discriminator.
#[derive(Clone, Default)]
pub struct ServiceMappings(HashMap<ProviderKind, ServiceConstructor>);
impl ServiceMappings {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry covering every built-in provider.
	pub fn builtin() -> Self {
		Self::new()
			.with(ProviderKind::EmploymentHero, employment_hero)
			.with(ProviderKind::HumanForce, humanforce)
			.with(ProviderKind::Myob, myob)
	}

	/// Builds a registry from explicit entries, rejecting repeated discriminators.
	pub fn try_from_entries<I>(entries: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (ProviderKind, ServiceConstructor)>,
	{
		let mut map = HashMap::new();

		for (provider, constructor) in entries {
			if map.contains_key(&provider) {
				return Err(ConfigError::DuplicateMapping { provider });
			}

			map.insert(provider, constructor);
		}

		Ok(Self(map))
	}

	/// Registers (or replaces) the constructor for `provider`.
	pub fn with<F>(mut self, provider: ProviderKind, constructor: F) -> Self
	where
		F: 'static + Send + Sync + Fn(Arc<dyn AuthStrategy>) -> Box<dyn TimesheetService>,
	{
		self.insert(provider, constructor);

		self
	}

	/// Registers (or replaces) the constructor for `provider`; returns `true` on replacement.
	pub fn insert<F>(&mut self, provider: ProviderKind, constructor: F) -> bool
	where
		F: 'static + Send + Sync + Fn(Arc<dyn AuthStrategy>) -> Box<dyn TimesheetService>,
	{
		self.0.insert(provider, Arc::new(constructor)).is_some()
	}

	/// Drops the constructor for `provider`; returns `true` if one existed.
	pub fn remove(&mut self, provider: &ProviderKind) -> bool {
		self.0.remove(provider).is_some()
	}

	/// Whether `provider` has a registered constructor.
	pub fn contains(&self, provider: &ProviderKind) -> bool {
		self.0.contains_key(provider)
	}

	/// Registered discriminators, in no particular order.
	pub fn providers(&self) -> impl Iterator<Item = &ProviderKind> {
		self.0.keys()
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn constructor(&self, provider: &ProviderKind) -> Option<ServiceConstructor> {
		self.0.get(provider).cloned()
	}
}
impl Debug for ServiceMappings {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.0.keys()).finish()
	}
}

/// Resolves strategies to freshly built provider services.
///
/// The registry can be swapped at runtime with [`ProviderSelector::set_mappings`]; swaps are
/// atomic with respect to concurrent [`ProviderSelector::resolve`] calls.
#[derive(Debug)]
pub struct ProviderSelector {
	mappings: RwLock<ServiceMappings>,
}
impl ProviderSelector {
	/// Creates a selector over an explicit registry.
	pub fn new(mappings: ServiceMappings) -> Self {
		Self { mappings: RwLock::new(mappings) }
	}

	/// Builds the service registered for the strategy's discriminator.
	///
	/// Fails with [`ConfigError::MissingStrategy`] when `strategy` is `None` and with
	/// [`Error::UnsupportedStrategy`] when the discriminator has no registry entry.
	pub fn resolve(
		&self,
		strategy: Option<Arc<dyn AuthStrategy>>,
	) -> Result<Box<dyn TimesheetService>> {
		let strategy = strategy.ok_or(ConfigError::MissingStrategy)?;
		let provider = strategy.provider();
		let constructor = self
			.mappings
			.read()
			.constructor(&provider)
			.ok_or_else(|| Error::UnsupportedStrategy { discriminator: provider.to_string() })?;

		Ok(constructor(strategy))
	}

	/// Shorthand for [`ProviderSelector::resolve`] with a strategy in hand.
	pub fn dispatch(&self, strategy: Arc<dyn AuthStrategy>) -> Result<Box<dyn TimesheetService>> {
		self.resolve(Some(strategy))
	}

	/// Replaces the registry, returning the previous one.
	pub fn set_mappings(&self, mappings: ServiceMappings) -> ServiceMappings {
		std::mem::replace(&mut *self.mappings.write(), mappings)
	}

	/// Snapshot of the current registry.
	pub fn mappings(&self) -> ServiceMappings {
		self.mappings.read().clone()
	}
}
impl Default for ProviderSelector {
	fn default() -> Self {
		Self::new(ServiceMappings::builtin())
	}
}

fn employment_hero(strategy: Arc<dyn AuthStrategy>) -> Box<dyn TimesheetService> {
	Box::new(EmploymentHeroTimesheetService::new(strategy))
}

fn humanforce(strategy: Arc<dyn AuthStrategy>) -> Box<dyn TimesheetService> {
	Box::new(HumanForceTimesheetService::new(strategy))
}

fn myob(strategy: Arc<dyn AuthStrategy>) -> Box<dyn TimesheetService> {
	Box::new(MyobTimesheetService::new(strategy))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::{StrategyConfig, make_strategy};

	fn strategy(label: &str) -> Arc<dyn AuthStrategy> {
		make_strategy(Some(label), Some(StrategyConfig::default()))
			.expect("Built-in strategy fixture should construct.")
	}

	#[test]
	fn builtin_registry_covers_every_builtin_provider() {
		let mappings = ServiceMappings::builtin();

		assert_eq!(mappings.len(), ProviderKind::BUILTIN.len());

		for provider in ProviderKind::BUILTIN {
			assert!(mappings.contains(&provider));
		}
	}

	#[test]
	fn resolve_matches_strategy_discriminator() {
		let selector = ProviderSelector::default();

		for label in ["EH", "HumanForce", "MYOB"] {
			let strategy = strategy(label);
			let expected = strategy.provider();
			let service = selector.dispatch(strategy).expect("Built-in strategies should resolve.");

			assert_eq!(service.provider(), expected);
		}
	}

	#[test]
	fn resolve_requires_strategy() {
		let err = ProviderSelector::default()
			.resolve(None)
			.err()
			.expect("Resolving without a strategy should fail.");

		assert!(matches!(err, Error::Config(ConfigError::MissingStrategy)));
		assert_eq!(err.to_string(), "Strategy is required.");
	}

	#[test]
	fn emptied_registry_reports_unsupported_discriminator() {
		let selector = ProviderSelector::default();
		let mut mappings = selector.mappings();

		assert!(mappings.remove(&ProviderKind::Myob));

		let previous = selector.set_mappings(mappings);

		assert!(previous.contains(&ProviderKind::Myob));

		let err = selector
			.dispatch(strategy("MYOB"))
			.err()
			.expect("Removed providers should no longer resolve.");

		assert!(
			matches!(err, Error::UnsupportedStrategy { ref discriminator } if discriminator == "MYOB")
		);
	}

	#[test]
	fn try_from_entries_rejects_duplicates() {
		let constructor: ServiceConstructor = Arc::new(myob);
		let err = ServiceMappings::try_from_entries([
			(ProviderKind::Myob, constructor.clone()),
			(ProviderKind::Myob, constructor),
		])
		.expect_err("Duplicate discriminators should be rejected.");

		assert_eq!(err, ConfigError::DuplicateMapping { provider: ProviderKind::Myob });
	}

	#[test]
	fn debug_lists_registered_providers() {
		let mappings = ServiceMappings::new().with(ProviderKind::HumanForce, humanforce);

		assert_eq!(format!("{mappings:?}"), "{HumanForce}");
	}
}
