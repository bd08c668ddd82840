//! Service contracts every provider integration exposes, and the authenticated-call envelope
//! they are built on.
//!
//! The contract is split in two layers: [`CrudService`] covers generic record access, and
//! [`TimesheetService`] extends it with `approve`. Every provided method fails with
//! [`Error::NotImplemented`] until a provider overrides it, so a half-finished integration
//! fails loudly instead of returning nothing.
//!
//! Provider bodies never authenticate on their own. They hand a closure to [`authenticated`]
//! (or build a reusable callable with [`api_call`]), which acquires a fresh
//! [`CredentialSet`] from the bound strategy, runs the body with it, and wraps any failure in
//! [`Error::ApiCall`] with the provider/operation context.

pub mod record;

pub use record::*;

// self
use crate::{
	_prelude::*,
	auth::{AuthStrategy, CredentialSet},
	obs::{self, CallOutcome, CallSpan},
	provider::ProviderKind,
};

/// Boxed future returned by service operations.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Contract operations, used to tag errors, spans, and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// [`CrudService::list`].
	List,
	/// [`CrudService::get`].
	Get,
	/// [`CrudService::create`].
	Create,
	/// [`CrudService::update`].
	Update,
	/// [`CrudService::delete`].
	Delete,
	/// [`TimesheetService::approve`].
	Approve,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::List => "list",
			Operation::Get => "get",
			Operation::Create => "create",
			Operation::Update => "update",
			Operation::Delete => "delete",
			Operation::Approve => "approve",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Generic record access every provider service exposes.
pub trait CrudService
where
	Self: Send + Sync,
{
	/// Discriminator of the provider this service talks to.
	fn provider(&self) -> ProviderKind;

	/// Lists records, optionally narrowed by `filter`.
	fn list(&self, _filter: Option<TimesheetFilter>) -> ServiceFuture<'_, Vec<TimesheetRecord>> {
		not_implemented(self.provider(), Operation::List)
	}

	/// Fetches one record. Providers report unknown ids as [`Error::NotFound`].
	fn get(&self, _id: TimesheetId) -> ServiceFuture<'_, TimesheetRecord> {
		not_implemented(self.provider(), Operation::Get)
	}

	/// Creates a record; the result carries a generated id and [`TimesheetStatus::Created`].
	fn create(&self, _payload: TimesheetPayload) -> ServiceFuture<'_, TimesheetRecord> {
		not_implemented(self.provider(), Operation::Create)
	}

	/// Updates a record; the result carries [`TimesheetStatus::Updated`].
	fn update(
		&self,
		_id: TimesheetId,
		_payload: TimesheetPayload,
	) -> ServiceFuture<'_, TimesheetRecord> {
		not_implemented(self.provider(), Operation::Update)
	}

	/// Deletes a record.
	fn delete(&self, _id: TimesheetId) -> ServiceFuture<'_, ()> {
		not_implemented(self.provider(), Operation::Delete)
	}
}

/// Timesheet-specific extension of [`CrudService`].
pub trait TimesheetService
where
	Self: CrudService,
{
	/// Approves a record; the result carries [`TimesheetStatus::Approved`].
	fn approve(&self, _id: TimesheetId) -> ServiceFuture<'_, TimesheetRecord> {
		not_implemented(self.provider(), Operation::Approve)
	}
}

/// Future that immediately fails with [`Error::NotImplemented`].
pub fn not_implemented<'a, T>(provider: ProviderKind, operation: Operation) -> ServiceFuture<'a, T>
where
	T: 'a + Send,
{
	Box::pin(std::future::ready(Err(Error::NotImplemented { provider, operation })))
}

/// Authenticates through `strategy`, then runs `body` with the issued credentials.
///
/// `authenticate` runs exactly once per invocation. Failures from either step come back as
/// [`Error::ApiCall`] tagged with the strategy's provider and `operation`; no partial result
/// is ever returned.
pub fn authenticated<T, K, Fut>(
	strategy: Arc<dyn AuthStrategy>,
	operation: Operation,
	body: K,
) -> ServiceFuture<'static, T>
where
	T: 'static + Send,
	K: 'static + Send + FnOnce(CredentialSet) -> Fut,
	Fut: 'static + Send + Future<Output = Result<T>>,
{
	Box::pin(async move {
		let provider = strategy.provider();
		let span = CallSpan::new(&provider, operation);

		obs::record_call_outcome(&provider, operation, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let credentials = strategy.authenticate().await?;

				obs::trace_credentials(&credentials);

				body(credentials).await
			})
			.await;

		match result {
			Ok(value) => {
				obs::record_call_outcome(&provider, operation, CallOutcome::Success);

				Ok(value)
			},
			Err(e) => {
				obs::record_call_outcome(&provider, operation, CallOutcome::Failure);

				let e = Error::api_call(provider, operation, e);

				obs::trace_failure(&e);

				Err(e)
			},
		}
	})
}

/// Lifts a curried operation body into a reusable authenticated callable.
///
/// `body` receives the operation's parameters and returns the credential-dependent part;
/// each call of the returned closure performs a full [`authenticated`] sequence.
pub fn api_call<P, T, B, K, Fut>(
	strategy: Arc<dyn AuthStrategy>,
	operation: Operation,
	body: B,
) -> impl Fn(P) -> ServiceFuture<'static, T>
where
	T: 'static + Send,
	B: Fn(P) -> K,
	K: 'static + Send + FnOnce(CredentialSet) -> Fut,
	Fut: 'static + Send + Future<Output = Result<T>>,
{
	move |params| authenticated(strategy.clone(), operation, body(params))
}
