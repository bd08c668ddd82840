//! MYOB integration.

timesheet_provider! {
	name: "MYOB",
	kind: Myob,
	strategy: MyobStrategy,
	service: MyobTimesheetService,
	identity: ("myob-tenant-001", "myob-user-123", "MYOB User"),
	get: ("Bob Wilson", 42.0, Pending),
	list: [(1, "Bob Wilson", 42.0)],
}
