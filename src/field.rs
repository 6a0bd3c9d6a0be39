//! Field identity and per-field validation state

use std::fmt;

/// The four signup form fields, in validation order.
///
/// The declaration order is the order fields are validated in and the
/// order [`crate::form::SignupForm::first_invalid`] reports them in,
/// so the UI can focus and scroll to the earliest problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	Name,
	Whatsapp,
	Email,
	Terms,
}

impl FieldKind {
	/// All fields in validation order.
	pub const ALL: [FieldKind; 4] = [
		FieldKind::Name,
		FieldKind::Whatsapp,
		FieldKind::Email,
		FieldKind::Terms,
	];

	/// Stable identifier used in error maps and log output.
	///
	/// # Examples
	///
	/// ```
	/// use leadform::FieldKind;
	///
	/// assert_eq!(FieldKind::Whatsapp.as_str(), "whatsapp");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldKind::Name => "name",
			FieldKind::Whatsapp => "whatsapp",
			FieldKind::Email => "email",
			FieldKind::Terms => "terms",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors produced while validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0} is required")]
	Required(FieldKind),
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Validity and error message for one input at a given moment.
///
/// A `FieldState` is rebuilt on every validation pass and overwritten
/// on revalidation; it is never persisted.
///
/// # Examples
///
/// ```
/// use leadform::FieldState;
///
/// let ok = FieldState::valid("Maria");
/// assert!(ok.is_valid);
/// assert!(ok.error.is_none());
///
/// let bad = FieldState::invalid("M", "Name must be at least 2 characters");
/// assert!(!bad.is_valid);
/// assert_eq!(bad.error.as_deref(), Some("Name must be at least 2 characters"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
	/// Raw value as last seen by validation.
	pub value: String,
	pub is_valid: bool,
	/// Inline error message; empty when the field is valid or untouched.
	pub error: Option<String>,
}

impl FieldState {
	/// State for a field that has not been validated yet.
	pub fn untouched() -> Self {
		Self {
			value: String::new(),
			is_valid: false,
			error: None,
		}
	}

	pub fn valid(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			is_valid: true,
			error: None,
		}
	}

	pub fn invalid(value: impl Into<String>, error: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			is_valid: false,
			error: Some(error.into()),
		}
	}

	/// Whether the UI should show an inline error for this field.
	///
	/// Untouched fields are not valid but have nothing to display.
	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}
}

impl Default for FieldState {
	fn default() -> Self {
		Self::untouched()
	}
}
