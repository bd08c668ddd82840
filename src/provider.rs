//! Provider discriminators and the built-in provider integrations.
//!
//! Each built-in provider module pairs an [`AuthStrategy`](crate::auth::AuthStrategy) with the
//! [`TimesheetService`](crate::service::TimesheetService) it dispatches to. Providers outside
//! the built-in set are addressed through [`ProviderKind::Custom`].

/// Declares a fixture-backed provider: its strategy, its timesheet service, and the records
/// that service answers with.
///
/// The strategy issues the fixed identity through [`StrategyConfig`](crate::auth::StrategyConfig),
/// carrying whatever bearer material it was configured with. Every operation body runs inside
/// [`authenticated`](crate::service::authenticated); `delete` keeps the contract default.
macro_rules! timesheet_provider {
	(
		name: $name:literal,
		kind: $kind:ident,
		strategy: $strategy:ident,
		service: $service:ident,
		identity: ($tenant:literal, $user:literal, $display:literal),
		get: ($employee:literal, $hours:literal, $status:ident),
		list: [$(($list_id:literal, $list_employee:literal, $list_hours:literal)),* $(,)?] $(,)?
	) => {
		use std::{
			fmt::{Debug, Formatter, Result as FmtResult},
			sync::Arc,
		};

		use $crate::{
			auth::{AuthFuture, AuthStrategy, StrategyConfig},
			provider::ProviderKind,
			service::{
				CrudService, Operation, ServiceFuture, TimesheetFilter, TimesheetId,
				TimesheetPayload, TimesheetRecord, TimesheetService, TimesheetStatus, authenticated,
			},
		};

		const PROVIDER: ProviderKind = ProviderKind::$kind;

		#[doc = concat!("Strategy issuing ", $name, " credentials.")]
		#[derive(Clone, Debug, Default)]
		pub struct $strategy {
			config: StrategyConfig,
		}
		impl $strategy {
			/// Creates the strategy from its (possibly empty) configuration.
			pub fn new(config: StrategyConfig) -> Self {
				Self { config }
			}

			/// Configuration the strategy was built with.
			pub fn config(&self) -> &StrategyConfig {
				&self.config
			}
		}
		impl AuthStrategy for $strategy {
			fn provider(&self) -> ProviderKind {
				PROVIDER
			}

			fn authenticate(&self) -> AuthFuture<'_> {
				let issued = self.config.issue($tenant, $user, $display);

				Box::pin(async move { issued })
			}
		}

		#[doc = concat!($name, " timesheet service.")]
		pub struct $service {
			strategy: Arc<dyn AuthStrategy>,
		}
		impl $service {
			/// Binds the service to the strategy it authenticates through.
			pub fn new(strategy: Arc<dyn AuthStrategy>) -> Self {
				Self { strategy }
			}
		}
		impl Debug for $service {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_struct(stringify!($service)).field("provider", &PROVIDER).finish()
			}
		}
		impl CrudService for $service {
			fn provider(&self) -> ProviderKind {
				PROVIDER
			}

			fn list(
				&self,
				filter: Option<TimesheetFilter>,
			) -> ServiceFuture<'_, Vec<TimesheetRecord>> {
				authenticated(self.strategy.clone(), Operation::List, move |_credentials| async move {
					let records = vec![$(
						TimesheetRecord::new(TimesheetId::new($list_id))
							.with_employee($list_employee)
							.with_hours($list_hours)
					),*];

					Ok(TimesheetFilter::apply(filter.as_ref(), records))
				})
			}

			fn get(&self, id: TimesheetId) -> ServiceFuture<'_, TimesheetRecord> {
				authenticated(self.strategy.clone(), Operation::Get, move |_credentials| async move {
					Ok(TimesheetRecord::new(id)
						.with_employee($employee)
						.with_hours($hours)
						.with_status(TimesheetStatus::$status))
				})
			}

			fn create(&self, payload: TimesheetPayload) -> ServiceFuture<'_, TimesheetRecord> {
				authenticated(self.strategy.clone(), Operation::Create, move |_credentials| async move {
					Ok(TimesheetRecord::from_payload(
						TimesheetId::generate(),
						payload,
						TimesheetStatus::Created,
					))
				})
			}

			fn update(
				&self,
				id: TimesheetId,
				payload: TimesheetPayload,
			) -> ServiceFuture<'_, TimesheetRecord> {
				authenticated(self.strategy.clone(), Operation::Update, move |_credentials| async move {
					Ok(TimesheetRecord::from_payload(id, payload, TimesheetStatus::Updated))
				})
			}
		}
		impl TimesheetService for $service {
			fn approve(&self, id: TimesheetId) -> ServiceFuture<'_, TimesheetRecord> {
				authenticated(self.strategy.clone(), Operation::Approve, move |_credentials| async move {
					Ok(TimesheetRecord::new(id).with_status(TimesheetStatus::Approved))
				})
			}
		}
	};
}

pub mod employment_hero;
pub mod humanforce;
pub mod myob;

pub use employment_hero::{EmploymentHeroStrategy, EmploymentHeroTimesheetService};
pub use humanforce::{HumanForceStrategy, HumanForceTimesheetService};
pub use myob::{MyobStrategy, MyobTimesheetService};

// self
use crate::{
	_prelude::*,
	auth::{ProviderId, id::fold_label},
	error::ConfigError,
};

/// Explicit tag identifying which provider a strategy or service belongs to.
///
/// Dispatch compares these by value, so strategies built in other crates (or at runtime)
/// resolve as long as they report the same tag. Build tags from labels with
/// [`FromStr`]: built-in labels map to their variant in any casing, and everything else
/// becomes a [`ProviderKind::Custom`] compared by its folded key. A custom tag can never
/// carry a built-in label, so each provider has exactly one value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProviderKind {
	/// Employment Hero.
	EmploymentHero,
	/// HumanForce.
	HumanForce,
	/// MYOB.
	Myob,
	/// Provider registered outside the built-in set.
	Custom(ProviderId),
}
impl ProviderKind {
	/// Every built-in provider, in registration order.
	pub const BUILTIN: [ProviderKind; 3] =
		[ProviderKind::EmploymentHero, ProviderKind::HumanForce, ProviderKind::Myob];

	/// Returns the stable label used in errors, spans, and metrics.
	pub fn as_str(&self) -> &str {
		match self {
			Self::EmploymentHero => "EH",
			Self::HumanForce => "HumanForce",
			Self::Myob => "MYOB",
			Self::Custom(id) => id.as_str(),
		}
	}

	/// Whether the tag names one of the built-in providers.
	pub fn is_builtin(&self) -> bool {
		!matches!(self, Self::Custom(_))
	}

	/// Built-in provider answering to a folded label, if any.
	pub(crate) fn builtin_for_key(key: &str) -> Option<Self> {
		match key {
			"eh" | "employmenthero" | "employment hero" => Some(Self::EmploymentHero),
			"humanforce" | "human force" => Some(Self::HumanForce),
			"myob" => Some(Self::Myob),
			_ => None,
		}
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProviderKind {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match Self::builtin_for_key(&fold_label(s)) {
			Some(builtin) => Ok(builtin),
			None => Ok(Self::Custom(ProviderId::new(s)?)),
		}
	}
}
impl TryFrom<String> for ProviderKind {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_str(&value)
	}
}
impl From<ProviderKind> for String {
	fn from(value: ProviderKind) -> Self {
		value.as_str().to_owned()
	}
}
