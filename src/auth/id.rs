//! Identity labels carried by issued credentials, and labels naming custom providers.
//!
//! Tenant and user ids are opaque values a provider hands back; they must be non-blank and
//! free of whitespace or control characters. Custom provider labels are human-facing
//! (`Key Pay`), so they keep inner spaces but compare through a folded key, see
//! [`ProviderId::key`].

// std
use std::hash::{Hash, Hasher};
// self
use crate::{_prelude::*, provider::ProviderKind};

/// Longest accepted identifier, in characters.
pub const IDENTIFIER_MAX_CHARS: usize = 128;

macro_rules! issued_id {
	($(#[$meta:meta])* $name:ident => $kind:ident) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Validates a provider-issued value.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let value = value.as_ref();

				check_opaque(IdentifierKind::$kind, value)?;

				Ok(Self(value.to_owned()))
			}

			/// Value exactly as the provider issued it.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				check_opaque(IdentifierKind::$kind, &value)?;

				Ok(Self(value))
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple(stringify!($name)).field(&self.0).finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

issued_id! {
	/// Provider-side tenant (organisation) the credentials act for.
	TenantId => Tenant
}
issued_id! {
	/// Provider-side user the credentials act as.
	UserId => User
}

/// What a rejected identifier was meant to name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierKind {
	/// [`TenantId`].
	Tenant,
	/// [`UserId`].
	User,
	/// [`ProviderId`].
	Provider,
}
impl Display for IdentifierKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			Self::Tenant => "Tenant",
			Self::User => "User",
			Self::Provider => "Provider",
		})
	}
}

/// Error returned when an identifier fails validation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// Empty, or nothing but whitespace.
	#[error("{kind} identifier cannot be blank.")]
	Blank {
		/// What the identifier names.
		kind: IdentifierKind,
	},
	/// Opaque identifier with whitespace in it.
	#[error("{kind} identifier `{value}` contains whitespace.")]
	Whitespace {
		/// What the identifier names.
		kind: IdentifierKind,
		/// Rejected value.
		value: String,
	},
	/// Identifier with control characters in it.
	#[error("{kind} identifier contains control characters.")]
	Control {
		/// What the identifier names.
		kind: IdentifierKind,
	},
	/// Identifier longer than [`IDENTIFIER_MAX_CHARS`].
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// What the identifier names.
		kind: IdentifierKind,
		/// Maximum permitted character count.
		max: usize,
	},
	/// Custom provider label that names a built-in provider.
	#[error("Provider label `{label}` is reserved for the built-in `{builtin}` provider.")]
	Reserved {
		/// Rejected label.
		label: String,
		/// Built-in provider the label resolves to.
		builtin: ProviderKind,
	},
}

/// Label of a provider registered outside the built-in set.
///
/// Leading and trailing whitespace is trimmed; the label is otherwise kept as given for
/// display. Equality and hashing use [`ProviderId::key`], so `Deputy`, `deputy`, and
/// `DEPUTY ` are the same provider. Labels that fold to a built-in provider are rejected;
/// parse them as [`ProviderKind`] instead.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId {
	label: String,
	key: String,
}
impl ProviderId {
	/// Validates and folds a custom provider label.
	pub fn new(label: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let label = label.as_ref().trim();

		check_length(IdentifierKind::Provider, label)?;

		if label.chars().any(char::is_control) {
			return Err(IdentifierError::Control { kind: IdentifierKind::Provider });
		}

		let key = fold_label(label);

		if let Some(builtin) = ProviderKind::builtin_for_key(&key) {
			return Err(IdentifierError::Reserved { label: label.to_owned(), builtin });
		}

		Ok(Self { label: label.to_owned(), key })
	}

	/// Label as registered, for display.
	pub fn as_str(&self) -> &str {
		&self.label
	}

	/// Lowercase key with whitespace runs collapsed to one space; drives equality.
	pub fn key(&self) -> &str {
		&self.key
	}
}
impl PartialEq for ProviderId {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}
impl Eq for ProviderId {}
impl Hash for ProviderId {
	fn hash<H>(&self, state: &mut H)
	where
		H: Hasher,
	{
		self.key.hash(state);
	}
}
impl AsRef<str> for ProviderId {
	fn as_ref(&self) -> &str {
		&self.label
	}
}
impl TryFrom<String> for ProviderId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ProviderId> for String {
	fn from(value: ProviderId) -> Self {
		value.label
	}
}
impl Debug for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ProviderId").field(&self.label).finish()
	}
}
impl Display for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.label)
	}
}

/// Folds a provider label to its comparison key.
pub(crate) fn fold_label(label: &str) -> String {
	label.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>().join(" ")
}

fn check_length(kind: IdentifierKind, value: &str) -> Result<(), IdentifierError> {
	if value.trim().is_empty() {
		return Err(IdentifierError::Blank { kind });
	}
	if value.chars().count() > IDENTIFIER_MAX_CHARS {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_CHARS });
	}

	Ok(())
}

fn check_opaque(kind: IdentifierKind, value: &str) -> Result<(), IdentifierError> {
	check_length(kind, value)?;

	if value.chars().any(char::is_whitespace) {
		return Err(IdentifierError::Whitespace { kind, value: value.to_owned() });
	}
	if value.chars().any(char::is_control) {
		return Err(IdentifierError::Control { kind });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn issued_ids_are_opaque() {
		let tenant = TenantId::new("eh-tenant-001").expect("Tenant fixture should be valid.");

		assert_eq!(tenant.as_str(), "eh-tenant-001");
		assert_eq!(format!("{tenant:?}"), "TenantId(\"eh-tenant-001\")");
		assert_eq!(UserId::new("   "), Err(IdentifierError::Blank { kind: IdentifierKind::User }));
		assert_eq!(
			TenantId::new("eh tenant"),
			Err(IdentifierError::Whitespace {
				kind: IdentifierKind::Tenant,
				value: "eh tenant".into()
			})
		);
	}

	#[test]
	fn serde_enforces_issued_id_validation() {
		let user: UserId =
			serde_json::from_str("\"hf-user-123\"").expect("User should deserialize successfully.");

		assert_eq!(user.as_str(), "hf-user-123");
		assert!(serde_json::from_str::<UserId>("\"with space\"").is_err());
		assert_eq!(
			serde_json::to_string(&user).expect("User should serialize successfully."),
			"\"hf-user-123\""
		);
	}

	#[test]
	fn provider_labels_keep_inner_spaces_and_compare_folded() {
		let spaced = ProviderId::new("  Key   Pay ").expect("Spaced labels should be accepted.");
		let folded = ProviderId::new("key pay").expect("Lowercase labels should be accepted.");

		assert_eq!(spaced.as_str(), "Key   Pay");
		assert_eq!(spaced.key(), "key pay");
		assert_eq!(spaced, folded);

		let map = HashMap::from([(spaced, 7_u8)]);

		assert_eq!(map.get(&folded), Some(&7));
	}

	#[test]
	fn provider_labels_cannot_shadow_builtins() {
		for label in ["MYOB", "myob", "Employment Hero", "eh", " HumanForce "] {
			let err = ProviderId::new(label).expect_err("Built-in labels should be reserved.");

			assert!(matches!(err, IdentifierError::Reserved { .. }), "{label}: {err:?}");
		}
		assert_eq!(
			ProviderId::new("MYOB"),
			Err(IdentifierError::Reserved { label: "MYOB".into(), builtin: ProviderKind::Myob })
		);
	}

	#[test]
	fn provider_labels_reject_control_and_blank_values() {
		assert_eq!(
			ProviderId::new("Dep\u{7}uty"),
			Err(IdentifierError::Control { kind: IdentifierKind::Provider })
		);
		assert_eq!(ProviderId::new(""), Err(IdentifierError::Blank { kind: IdentifierKind::Provider }));
	}

	#[test]
	fn length_limit_counts_characters() {
		ProviderId::new("é".repeat(IDENTIFIER_MAX_CHARS)).expect("Exact length should succeed.");

		assert_eq!(
			ProviderId::new("a".repeat(IDENTIFIER_MAX_CHARS + 1)),
			Err(IdentifierError::TooLong {
				kind: IdentifierKind::Provider,
				max: IDENTIFIER_MAX_CHARS
			})
		);
	}
}
