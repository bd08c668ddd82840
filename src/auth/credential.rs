//! Authenticated context returned by strategies.

// self
use crate::{
	_prelude::*,
	auth::{CredentialSecret, TenantId, UserId},
	error::AuthError,
};

/// Tenant/user identity a provider issued for one call.
///
/// A fresh set is produced by every [`AuthStrategy::authenticate`](crate::auth::AuthStrategy)
/// call and handed to exactly one operation body; the broker never caches it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
	/// Tenant (organisation) the credentials act for.
	pub tenant_id: TenantId,
	/// User the credentials act as.
	pub user_id: UserId,
	/// Human-readable name of the authenticated user.
	pub display_name: String,
	/// Bearer material a transport can attach to outbound requests.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bearer: Option<CredentialSecret>,
}
impl CredentialSet {
	/// Builds a credential set from raw labels, validating both identifiers.
	pub fn new(
		tenant_id: impl AsRef<str>,
		user_id: impl AsRef<str>,
		display_name: impl Into<String>,
	) -> Result<Self, AuthError> {
		Ok(Self {
			tenant_id: TenantId::new(tenant_id)?,
			user_id: UserId::new(user_id)?,
			display_name: display_name.into(),
			bearer: None,
		})
	}

	/// Attaches bearer material, replacing any previous value.
	pub fn with_bearer(mut self, bearer: Option<CredentialSecret>) -> Self {
		self.bearer = bearer;

		self
	}
}
impl Debug for CredentialSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialSet")
			.field("tenant_id", &self.tenant_id)
			.field("user_id", &self.user_id)
			.field("display_name", &self.display_name)
			.field("bearer_set", &self.bearer.is_some())
			.finish()
	}
}
