// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// self
use timesheet_broker::{
	ProviderSelector,
	auth::{AuthFuture, AuthStrategy, CredentialSet, StrategyConfig, make_strategy},
	error::{AuthError, Error},
	provider::ProviderKind,
	service::{
		CrudService, Operation, TimesheetFilter, TimesheetId, TimesheetPayload, TimesheetService,
		TimesheetStatus,
	},
};

/// Strategy that counts `authenticate` calls and can be told to deny them.
struct CountingStrategy {
	provider: ProviderKind,
	calls: AtomicUsize,
	deny: bool,
}
impl CountingStrategy {
	fn new(provider: ProviderKind, deny: bool) -> Arc<Self> {
		Arc::new(Self { provider, calls: AtomicUsize::new(0), deny })
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl AuthStrategy for CountingStrategy {
	fn provider(&self) -> ProviderKind {
		self.provider.clone()
	}

	fn authenticate(&self) -> AuthFuture<'_> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async move {
			if self.deny {
				return Err(AuthError::Denied {
					provider: self.provider.clone(),
					reason: "invalid api key".into(),
				});
			}

			CredentialSet::new("test-tenant", "test-user", "Test User")
		})
	}
}

fn service_for(strategy: Arc<CountingStrategy>) -> Box<dyn TimesheetService> {
	ProviderSelector::default().dispatch(strategy).expect("Built-in providers should resolve.")
}

#[tokio::test]
async fn every_operation_authenticates_exactly_once() {
	for kind in ProviderKind::BUILTIN {
		let strategy = CountingStrategy::new(kind.clone(), false);
		let service = service_for(strategy.clone());
		let id = TimesheetId::new(1);

		service.list(None).await.expect("List should succeed.");
		assert_eq!(strategy.calls(), 1, "{kind}: list");

		service.get(id).await.expect("Get should succeed.");
		assert_eq!(strategy.calls(), 2, "{kind}: get");

		service.create(TimesheetPayload::default()).await.expect("Create should succeed.");
		assert_eq!(strategy.calls(), 3, "{kind}: create");

		service.update(id, TimesheetPayload::default()).await.expect("Update should succeed.");
		assert_eq!(strategy.calls(), 4, "{kind}: update");

		service.approve(id).await.expect("Approve should succeed.");
		assert_eq!(strategy.calls(), 5, "{kind}: approve");
	}
}

#[tokio::test]
async fn denied_authentication_surfaces_as_api_call_error() {
	for kind in ProviderKind::BUILTIN {
		let strategy = CountingStrategy::new(kind.clone(), true);
		let service = service_for(strategy.clone());
		let err = service.get(TimesheetId::new(1)).await.expect_err("Denied auth must fail get.");

		match &err {
			Error::ApiCall { provider, operation, source } => {
				assert_eq!(provider, &kind);
				assert_eq!(*operation, Operation::Get);
				assert!(matches!(**source, Error::Authentication(AuthError::Denied { .. })));
			},
			other => panic!("Unexpected error: {other:?}"),
		}

		let err = service.approve(TimesheetId::new(1)).await.expect_err("Denied auth must fail approve.");

		assert!(err.is_authentication());
		assert!(err.to_string().contains("approve"));
		assert_eq!(strategy.calls(), 2);
	}
}

#[tokio::test]
async fn provider_selection_changes_behaviour() {
	let selector = ProviderSelector::default();
	let eh = make_strategy(Some("EH"), Some(StrategyConfig::default()))
		.expect("EH strategy should construct.");
	let hf = make_strategy(Some("HumanForce"), Some(StrategyConfig::default()))
		.expect("HumanForce strategy should construct.");
	let eh_record = selector
		.dispatch(eh)
		.expect("EH should resolve.")
		.get(TimesheetId::new(1))
		.await
		.expect("EH get should succeed.");
	let hf_record = selector
		.dispatch(hf)
		.expect("HumanForce should resolve.")
		.get(TimesheetId::new(1))
		.await
		.expect("HumanForce get should succeed.");

	assert_eq!(eh_record.status, Some(TimesheetStatus::Approved));
	assert_eq!(hf_record.status, Some(TimesheetStatus::Pending));
	assert_ne!(eh_record.employee, hf_record.employee);
}

#[tokio::test]
async fn create_returns_generated_id_and_payload_superset() {
	let strategy = make_strategy(Some("MYOB"), Some(StrategyConfig::default().with_api_key("k")))
		.expect("MYOB strategy should construct.");
	let service = ProviderSelector::default().dispatch(strategy).expect("MYOB should resolve.");
	let payload = TimesheetPayload::default()
		.with_employee("Bob Wilson")
		.with_hours(7.25)
		.with_field("week", "2026-W42");
	let record = service.create(payload.clone()).await.expect("Create should succeed.");

	assert!(record.id.get() > 0);
	assert_eq!(record.status, Some(TimesheetStatus::Created));
	assert_eq!(record.employee, payload.employee);
	assert_eq!(record.hours, payload.hours);
	assert_eq!(record.fields.get("week"), payload.fields.get("week"));

	let json = serde_json::to_value(&record).expect("Created records should serialize.");

	assert_eq!(json["status"], "created");
	assert_eq!(json["week"], "2026-W42");
}

#[tokio::test]
async fn update_and_approve_keep_the_requested_id() {
	let strategy = make_strategy(Some("EH"), Some(StrategyConfig::default()))
		.expect("EH strategy should construct.");
	let service = ProviderSelector::default().dispatch(strategy).expect("EH should resolve.");
	let id = TimesheetId::new(42);
	let updated = service
		.update(id, TimesheetPayload::default().with_hours(40.0))
		.await
		.expect("Update should succeed.");
	let approved = service.approve(id).await.expect("Approve should succeed.");

	assert_eq!((updated.id, updated.status), (id, Some(TimesheetStatus::Updated)));
	assert_eq!((approved.id, approved.status), (id, Some(TimesheetStatus::Approved)));
}

#[tokio::test]
async fn list_filter_narrows_provider_results() {
	let strategy = make_strategy(Some("HumanForce"), Some(StrategyConfig::default()))
		.expect("HumanForce strategy should construct.");
	let service = ProviderSelector::default().dispatch(strategy).expect("HumanForce should resolve.");
	let all = service.list(None).await.expect("Unfiltered list should succeed.");
	let john = service
		.list(Some(TimesheetFilter::default().employee("John Doe")))
		.await
		.expect("Filtered list should succeed.");

	assert_eq!(all.len(), 2);
	assert_eq!(john.len(), 1);
	assert_eq!(john[0].hours, Some(40.0));
}

/// Generic contract only: `approve` is not even callable on this type.
struct ReadOnlyService;
impl CrudService for ReadOnlyService {
	fn provider(&self) -> ProviderKind {
		ProviderKind::Myob
	}
}

#[tokio::test]
async fn bare_generic_contract_fails_with_not_implemented() {
	let service = ReadOnlyService;
	let err = service.list(None).await.expect_err("Unimplemented list should fail.");

	assert!(matches!(err, Error::NotImplemented { operation: Operation::List, .. }));
	assert!(
		service
			.update(TimesheetId::new(1), TimesheetPayload::default())
			.await
			.expect_err("Unimplemented update should fail.")
			.is_not_implemented()
	);
}

#[tokio::test]
async fn builtin_providers_leave_delete_unimplemented() {
	for kind in ProviderKind::BUILTIN {
		let strategy = CountingStrategy::new(kind.clone(), false);
		let service = service_for(strategy.clone());
		let err = service.delete(TimesheetId::new(1)).await.expect_err("Delete is not supported.");

		assert!(err.is_not_implemented());
		// Unimplemented operations never reach the strategy.
		assert_eq!(strategy.calls(), 0);
	}
}
