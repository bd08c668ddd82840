//! Timesheet payloads exchanged with providers.

// self
use crate::_prelude::*;

const RESERVED_FIELDS: [&str; 4] = ["id", "employee", "hours", "status"];

/// Provider-side timesheet identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetId(u64);
impl TimesheetId {
	/// Wraps a raw identifier.
	pub const fn new(value: u64) -> Self {
		Self(value)
	}

	/// Generates an identifier from the current UTC time in milliseconds.
	///
	/// Never zero: clocks set before the Unix epoch saturate to `1`.
	pub fn generate() -> Self {
		Self::from_unix_millis(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000)
	}

	fn from_unix_millis(millis: i128) -> Self {
		Self(u64::try_from(millis.max(1)).unwrap_or(u64::MAX))
	}

	/// Returns the raw identifier.
	pub const fn get(self) -> u64 {
		self.0
	}
}
impl From<u64> for TimesheetId {
	fn from(value: u64) -> Self {
		Self(value)
	}
}
impl Display for TimesheetId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}", self.0)
	}
}

/// Lifecycle state reported by a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
	/// Submitted and awaiting approval.
	Pending,
	/// Approved by a manager.
	Approved,
	/// Freshly created through the broker.
	Created,
	/// Modified through the broker.
	Updated,
}
impl TimesheetStatus {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Pending => "pending",
			Self::Approved => "approved",
			Self::Created => "created",
			Self::Updated => "updated",
		}
	}
}
impl Display for TimesheetStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Timesheet as returned by a provider.
///
/// Providers fill in what they know; `fields` carries anything beyond the common columns
/// (payload pass-through on create/update, provider-assigned attributes).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRecord {
	/// Provider-side identifier.
	pub id: TimesheetId,
	/// Employee the timesheet belongs to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub employee: Option<String>,
	/// Hours recorded.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hours: Option<f64>,
	/// Lifecycle state, when the provider reports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<TimesheetStatus>,
	/// Additional provider- or caller-supplied fields.
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}
impl TimesheetRecord {
	/// Creates an empty record for `id`.
	pub fn new(id: TimesheetId) -> Self {
		Self { id, employee: None, hours: None, status: None, fields: Map::new() }
	}

	/// Builds a record from a caller payload, stamping `id` and `status` over it.
	pub fn from_payload(id: TimesheetId, payload: TimesheetPayload, status: TimesheetStatus) -> Self {
		let TimesheetPayload { employee, hours, mut fields } = payload;

		fields.retain(|key, _| !RESERVED_FIELDS.contains(&key.as_str()));

		Self { id, employee, hours, status: Some(status), fields }
	}

	/// Sets the employee.
	pub fn with_employee(mut self, employee: impl Into<String>) -> Self {
		self.employee = Some(employee.into());

		self
	}

	/// Sets the recorded hours.
	pub fn with_hours(mut self, hours: f64) -> Self {
		self.hours = Some(hours);

		self
	}

	/// Sets the lifecycle state.
	pub fn with_status(mut self, status: TimesheetStatus) -> Self {
		self.status = Some(status);

		self
	}
}

/// Caller-supplied body for create and update operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesheetPayload {
	/// Employee the timesheet belongs to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub employee: Option<String>,
	/// Hours recorded.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hours: Option<f64>,
	/// Additional fields forwarded to the provider.
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}
impl TimesheetPayload {
	/// Sets the employee.
	pub fn with_employee(mut self, employee: impl Into<String>) -> Self {
		self.employee = Some(employee.into());

		self
	}

	/// Sets the recorded hours.
	pub fn with_hours(mut self, hours: f64) -> Self {
		self.hours = Some(hours);

		self
	}

	/// Adds an extra field.
	pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.fields.insert(key.into(), value.into());

		self
	}
}

/// Narrows `list` results. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetFilter {
	/// Only records for this employee.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub employee: Option<String>,
	/// Only records in this state.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<TimesheetStatus>,
}
impl TimesheetFilter {
	/// Restricts results to one employee.
	pub fn employee(mut self, employee: impl Into<String>) -> Self {
		self.employee = Some(employee.into());

		self
	}

	/// Restricts results to one state.
	pub fn status(mut self, status: TimesheetStatus) -> Self {
		self.status = Some(status);

		self
	}

	/// Whether `record` satisfies every set criterion.
	pub fn matches(&self, record: &TimesheetRecord) -> bool {
		let employee_matches = self
			.employee
			.as_deref()
			.is_none_or(|employee| record.employee.as_deref() == Some(employee));
		let status_matches = self.status.is_none_or(|status| record.status == Some(status));

		employee_matches && status_matches
	}

	/// Applies the filter (if any) to a record set.
	pub fn apply(filter: Option<&Self>, records: Vec<TimesheetRecord>) -> Vec<TimesheetRecord> {
		match filter {
			Some(filter) => records.into_iter().filter(|record| filter.matches(record)).collect(),
			None => records,
		}
	}
}
