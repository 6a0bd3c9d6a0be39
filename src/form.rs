//! The signup form: bound input, validation passes, error state

use crate::field::{FieldKind, FieldState};
use crate::validators::{EmailValidator, NameValidator, PhoneValidator, TermsValidator};

/// Typed snapshot of the four signup inputs as the UI holds them.
///
/// `whatsapp` carries the masked display value; validation strips the
/// mask before counting digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
	pub name: String,
	pub whatsapp: String,
	pub email: String,
	pub terms_accepted: bool,
}

/// One field's validation errors inside a [`ValidationFailure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
	pub field: FieldKind,
	pub message: String,
}

/// The outcome of a failed atomic validation pass.
///
/// Carries every per-field message plus the first invalid field in
/// validation order, so the UI can scroll to and focus the earliest
/// problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
	pub issues: Vec<FieldIssue>,
	pub first_invalid: FieldKind,
}

impl ValidationFailure {
	/// Messages for one field, in the order they were raised.
	pub fn messages_for(&self, field: FieldKind) -> Vec<&str> {
		self.issues
			.iter()
			.filter(|issue| issue.field == field)
			.map(|issue| issue.message.as_str())
			.collect()
	}
}

/// The signup form: four fields validated both incrementally (on
/// blur/input) and atomically (on submit).
///
/// Submission may proceed only when all four [`FieldState`]s are valid
/// simultaneously; [`SignupForm::validate`] answers exactly that.
///
/// # Examples
///
/// ```
/// use leadform::{FieldKind, FormInput, SignupForm};
///
/// let mut form = SignupForm::new();
/// form.bind(FormInput {
///     name: "Maria Silva".to_string(),
///     whatsapp: "(11) 99999-8888".to_string(),
///     email: "maria@example.com".to_string(),
///     terms_accepted: true,
/// });
///
/// assert!(form.validate());
/// assert!(form.field_state(FieldKind::Email).is_valid);
/// assert!(form.first_invalid().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
	input: FormInput,
	name: FieldState,
	whatsapp: FieldState,
	email: FieldState,
	terms: FieldState,
}

impl SignupForm {
	/// Creates an empty, untouched form.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a form already bound to the given input.
	pub fn with_input(input: FormInput) -> Self {
		Self {
			input,
			..Self::default()
		}
	}

	/// Replaces the bound input, leaving field states untouched until
	/// the next validation pass.
	pub fn bind(&mut self, input: FormInput) {
		self.input = input;
	}

	pub fn input(&self) -> &FormInput {
		&self.input
	}

	pub fn input_mut(&mut self) -> &mut FormInput {
		&mut self.input
	}

	pub fn field_state(&self, field: FieldKind) -> &FieldState {
		match field {
			FieldKind::Name => &self.name,
			FieldKind::Whatsapp => &self.whatsapp,
			FieldKind::Email => &self.email,
			FieldKind::Terms => &self.terms,
		}
	}

	/// Revalidates a single field against the bound input, replacing
	/// its state. This is the incremental (blur/input/change) pass.
	///
	/// # Examples
	///
	/// ```
	/// use leadform::{FieldKind, FormInput, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.input_mut().email = "not-an-email".to_string();
	///
	/// let state = form.validate_field(FieldKind::Email);
	/// assert!(!state.is_valid);
	/// assert!(state.error.is_some());
	/// ```
	pub fn validate_field(&mut self, field: FieldKind) -> &FieldState {
		let state = self.check(field);
		match field {
			FieldKind::Name => self.name = state,
			FieldKind::Whatsapp => self.whatsapp = state,
			FieldKind::Email => self.email = state,
			FieldKind::Terms => self.terms = state,
		}
		self.field_state(field)
	}

	/// Clears the inline error for a field without revalidating it.
	///
	/// Matches the UX rule that typing in a field hides its error
	/// until the next blur.
	pub fn clear_error(&mut self, field: FieldKind) {
		let state = match field {
			FieldKind::Name => &mut self.name,
			FieldKind::Whatsapp => &mut self.whatsapp,
			FieldKind::Email => &mut self.email,
			FieldKind::Terms => &mut self.terms,
		};
		state.error = None;
	}

	/// Validates all four fields against the bound input and returns
	/// whether every one of them is valid. This is the atomic
	/// (submit-time) pass; it always revalidates everything so stale
	/// states cannot leak into a submission decision.
	pub fn validate(&mut self) -> bool {
		for field in FieldKind::ALL {
			self.validate_field(field);
		}
		FieldKind::ALL
			.iter()
			.all(|field| self.field_state(*field).is_valid)
	}

	/// The first invalid field in validation order, if any.
	pub fn first_invalid(&self) -> Option<FieldKind> {
		FieldKind::ALL
			.into_iter()
			.find(|field| !self.field_state(*field).is_valid)
	}

	/// Collects the current error state into a [`ValidationFailure`],
	/// or `None` when every field is valid.
	pub fn failure(&self) -> Option<ValidationFailure> {
		let first_invalid = self.first_invalid()?;
		let issues = FieldKind::ALL
			.into_iter()
			.filter_map(|field| {
				self.field_state(field).error.as_ref().map(|message| FieldIssue {
					field,
					message: message.clone(),
				})
			})
			.collect();
		Some(ValidationFailure {
			issues,
			first_invalid,
		})
	}

	fn check(&self, field: FieldKind) -> FieldState {
		match field {
			FieldKind::Name => match NameValidator::new().validate(&self.input.name) {
				Ok(()) => FieldState::valid(self.input.name.trim()),
				Err(e) => FieldState::invalid(&self.input.name, e.to_string()),
			},
			FieldKind::Whatsapp => match PhoneValidator::new().validate(&self.input.whatsapp) {
				Ok(()) => FieldState::valid(&self.input.whatsapp),
				Err(e) => FieldState::invalid(&self.input.whatsapp, e.to_string()),
			},
			FieldKind::Email => match EmailValidator::new().validate(&self.input.email) {
				Ok(()) => FieldState::valid(self.input.email.trim()),
				Err(e) => FieldState::invalid(&self.input.email, e.to_string()),
			},
			FieldKind::Terms => match TermsValidator::new().validate(self.input.terms_accepted) {
				Ok(()) => FieldState::valid(self.input.terms_accepted.to_string()),
				Err(e) => {
					FieldState::invalid(self.input.terms_accepted.to_string(), e.to_string())
				}
			},
		}
	}
}

/// Atomic validation of a [`FormInput`] without keeping a form around.
///
/// This is the submit-time entry point: `Ok(())` when all four fields
/// are valid, otherwise the full [`ValidationFailure`].
///
/// # Examples
///
/// ```
/// use leadform::{FieldKind, FormInput, validate_input};
///
/// let failure = validate_input(&FormInput::default()).unwrap_err();
/// assert_eq!(failure.first_invalid, FieldKind::Name);
/// ```
pub fn validate_input(input: &FormInput) -> Result<(), ValidationFailure> {
	let mut form = SignupForm::with_input(input.clone());
	if form.validate() {
		Ok(())
	} else {
		// validate() returning false guarantees a failure is present
		Err(form.failure().unwrap_or(ValidationFailure {
			issues: vec![],
			first_invalid: FieldKind::Name,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn valid_input() -> FormInput {
		FormInput {
			name: "Maria Silva".to_string(),
			whatsapp: "(11) 99999-8888".to_string(),
			email: "maria@example.com".to_string(),
			terms_accepted: true,
		}
	}

	#[rstest]
	fn test_all_valid_input_passes() {
		// Arrange
		let mut form = SignupForm::with_input(valid_input());

		// Act
		let valid = form.validate();

		// Assert
		assert!(valid);
		assert!(form.first_invalid().is_none());
		assert!(form.failure().is_none());
		for field in FieldKind::ALL {
			assert!(form.field_state(field).is_valid, "{field} should be valid");
		}
	}

	#[rstest]
	#[case(FieldKind::Name, FormInput { name: "M".to_string(), ..valid_input() })]
	#[case(FieldKind::Whatsapp, FormInput { whatsapp: "119".to_string(), ..valid_input() })]
	#[case(FieldKind::Email, FormInput { email: "nope".to_string(), ..valid_input() })]
	#[case(FieldKind::Terms, FormInput { terms_accepted: false, ..valid_input() })]
	fn test_single_invalid_field_is_identified(
		#[case] expected: FieldKind,
		#[case] input: FormInput,
	) {
		// Arrange
		let mut form = SignupForm::with_input(input);

		// Act
		let valid = form.validate();

		// Assert
		assert!(!valid);
		assert_eq!(form.first_invalid(), Some(expected));
		let failure = form.failure().expect("failure should be present");
		assert_eq!(failure.first_invalid, expected);
		assert_eq!(failure.issues.len(), 1);
		assert_eq!(failure.issues[0].field, expected);
	}

	#[rstest]
	fn test_first_invalid_follows_validation_order() {
		// Arrange: both email and whatsapp invalid
		let mut form = SignupForm::with_input(FormInput {
			whatsapp: "12".to_string(),
			email: "broken".to_string(),
			..valid_input()
		});

		// Act
		form.validate();

		// Assert: whatsapp comes before email in validation order
		assert_eq!(form.first_invalid(), Some(FieldKind::Whatsapp));
	}

	#[rstest]
	fn test_incremental_validation_only_touches_one_field() {
		// Arrange
		let mut form = SignupForm::with_input(valid_input());
		form.input_mut().email = "broken".to_string();

		// Act
		form.validate_field(FieldKind::Email);

		// Assert: other fields remain untouched
		assert!(!form.field_state(FieldKind::Email).is_valid);
		assert!(!form.field_state(FieldKind::Name).has_error());
		assert!(!form.field_state(FieldKind::Name).is_valid);
	}

	#[rstest]
	fn test_clear_error_hides_message_until_revalidation() {
		// Arrange
		let mut form = SignupForm::new();
		form.validate_field(FieldKind::Name);
		assert!(form.field_state(FieldKind::Name).has_error());

		// Act
		form.clear_error(FieldKind::Name);

		// Assert
		assert!(!form.field_state(FieldKind::Name).has_error());
		assert!(!form.field_state(FieldKind::Name).is_valid);
	}

	#[rstest]
	fn test_revalidation_overwrites_previous_state() {
		// Arrange
		let mut form = SignupForm::new();
		form.validate_field(FieldKind::Email);
		assert!(!form.field_state(FieldKind::Email).is_valid);

		// Act
		form.input_mut().email = "maria@example.com".to_string();
		form.validate_field(FieldKind::Email);

		// Assert
		assert!(form.field_state(FieldKind::Email).is_valid);
		assert!(!form.field_state(FieldKind::Email).has_error());
	}

	#[rstest]
	fn test_failure_collects_all_messages() {
		// Arrange
		let mut form = SignupForm::with_input(FormInput::default());

		// Act
		form.validate();
		let failure = form.failure().expect("failure should be present");

		// Assert
		assert_eq!(failure.first_invalid, FieldKind::Name);
		assert_eq!(failure.issues.len(), 4);
		assert_eq!(
			failure.messages_for(FieldKind::Terms),
			vec!["You must agree to the terms"]
		);
	}

	#[rstest]
	fn test_validate_input_shortcut() {
		assert!(validate_input(&valid_input()).is_ok());
		let failure = validate_input(&FormInput {
			terms_accepted: false,
			..valid_input()
		})
		.unwrap_err();
		assert_eq!(failure.first_invalid, FieldKind::Terms);
	}
}
