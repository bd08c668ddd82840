//! Provider-agnostic timesheet access: hand the broker an authentication strategy, get back
//! the matching HR/payroll service, and call it through one authenticate-then-call contract.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod obs;
pub mod provider;
pub mod service;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::{Error, Result};
}

pub use dispatch::{ProviderSelector, ServiceMappings};
pub use serde_json;
