//! Employment Hero integration.

timesheet_provider! {
	name: "Employment Hero",
	kind: EmploymentHero,
	strategy: EmploymentHeroStrategy,
	service: EmploymentHeroTimesheetService,
	identity: ("eh-tenant-001", "eh-user-123", "EH User"),
	get: ("Jane Smith", 38.0, Approved),
	list: [(1, "Jane Smith", 38.0)],
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn service(config: StrategyConfig) -> EmploymentHeroTimesheetService {
		EmploymentHeroTimesheetService::new(Arc::new(EmploymentHeroStrategy::new(config)))
	}

	#[tokio::test]
	async fn strategy_issues_eh_identity_with_bearer() {
		let strategy = EmploymentHeroStrategy::new(
			StrategyConfig::default().with_api_key("eh-key").with_access_token("eh-token"),
		);
		let credentials = strategy.authenticate().await.expect("EH authentication should succeed.");

		assert_eq!(credentials.tenant_id.as_ref(), "eh-tenant-001");
		assert_eq!(credentials.user_id.as_ref(), "eh-user-123");
		assert_eq!(credentials.display_name, "EH User");
		assert_eq!(credentials.bearer.as_ref().map(|secret| secret.expose()), Some("eh-token"));
	}

	#[tokio::test]
	async fn get_reports_approved_timesheet() {
		let record = service(StrategyConfig::default())
			.get(TimesheetId::new(1))
			.await
			.expect("EH get should succeed.");

		assert_eq!(record.employee.as_deref(), Some("Jane Smith"));
		assert_eq!(record.hours, Some(38.0));
		assert_eq!(record.status, Some(TimesheetStatus::Approved));
	}

	#[tokio::test]
	async fn list_honours_status_filter() {
		let service = service(StrategyConfig::default());
		let all = service.list(None).await.expect("EH list should succeed.");

		assert_eq!(all.len(), 1);
		assert!(all[0].status.is_none());

		let approved = service
			.list(Some(TimesheetFilter::default().status(TimesheetStatus::Approved)))
			.await
			.expect("Filtered EH list should succeed.");

		assert!(approved.is_empty());
	}
}
