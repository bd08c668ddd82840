//! Optional observability helpers for authenticated provider calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to wrap every call in a `timesheet_broker.call` span carrying
//!   `provider` and `operation` fields, plus debug events for credential acquisition and
//!   failures.
//! - Enable `metrics` to increment the `timesheet_broker_call_total` counter for every
//!   attempt/success/failure, labeled by `provider`, `operation`, and `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to an authenticated call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
