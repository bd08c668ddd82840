//! HumanForce integration.

timesheet_provider! {
	name: "HumanForce",
	kind: HumanForce,
	strategy: HumanForceStrategy,
	service: HumanForceTimesheetService,
	identity: ("hf-tenant-001", "hf-user-123", "HumanForce User"),
	get: ("John Doe", 40.0, Pending),
	list: [(1, "John Doe", 40.0), (2, "Alice Brown", 35.0)],
}
