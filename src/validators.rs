//! Per-field validation rules for the signup form
//!
//! Each validator is a small builder-style object with a default error
//! message that can be overridden via `with_message`. Validators are
//! pure: they take the raw input value and return a [`FieldResult`],
//! leaving error display to the caller.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Unicode letters and whitespace only. The form accepts accented and
// non-Latin names, so this is \p{L} rather than an ASCII class.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\p{L}\s]+$").expect("NAME_REGEX: invalid regex pattern")
});

// Loose `local@domain.tld` shape: no whitespace, a single `@`, at
// least one dot after it. Deliverability is the backend's problem.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Keeps only ASCII digits from the input.
///
/// # Examples
///
/// ```
/// use leadform::validators::digits_only;
///
/// assert_eq!(digits_only("(11) 99999-8888"), "11999998888");
/// assert_eq!(digits_only("abc"), "");
/// ```
pub fn digits_only(value: &str) -> String {
	value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a person's name: at least 2 characters after trimming,
/// letters and whitespace only.
///
/// # Examples
///
/// ```
/// use leadform::validators::NameValidator;
///
/// let validator = NameValidator::new();
/// assert!(validator.validate("Maria Silva").is_ok());
/// assert!(validator.validate("José").is_ok());
/// assert!(validator.validate("M").is_err());
/// assert!(validator.validate("R2-D2").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NameValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl NameValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given value as a name.
	///
	/// The value is trimmed before checking; length is counted in
	/// characters, not bytes, so accented names are not penalized.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let value = value.trim();
		if value.chars().count() < 2 {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Name must be at least 2 characters");
			return Err(FieldError::Validation(msg.to_string()));
		}
		if !NAME_REGEX.is_match(value) {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Name may only contain letters");
			return Err(FieldError::Validation(msg.to_string()));
		}
		Ok(())
	}
}

impl Default for NameValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates a Brazilian phone number by digit count.
///
/// Non-digit characters (mask punctuation, spaces) are stripped before
/// counting, so masked display values validate as typed. Landlines
/// have 10 digits, mobiles 11.
///
/// # Examples
///
/// ```
/// use leadform::validators::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("(11) 99999-8888").is_ok());
/// assert!(validator.validate("1133334444").is_ok());
/// assert!(validator.validate("119999").is_err());
/// assert!(validator.validate("119999988887").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl PhoneValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let digits = digits_only(value);
		if digits.len() < 10 {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("WhatsApp number must have at least 10 digits");
			return Err(FieldError::Validation(msg.to_string()));
		}
		if digits.len() > 11 {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("WhatsApp number must have at most 11 digits");
			return Err(FieldError::Validation(msg.to_string()));
		}
		Ok(())
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates an e-mail address against a loose `local@domain.tld`
/// shape.
///
/// # Examples
///
/// ```
/// use leadform::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.c").is_ok());
/// assert!(validator.validate("maria@example.com").is_ok());
/// assert!(validator.validate("abc").is_err());
/// assert!(validator.validate("a@b").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value.trim()) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid e-mail");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates the terms-of-service checkbox.
///
/// # Examples
///
/// ```
/// use leadform::validators::TermsValidator;
///
/// let validator = TermsValidator::new();
/// assert!(validator.validate(true).is_ok());
/// assert!(validator.validate(false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TermsValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl TermsValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, checked: bool) -> FieldResult<()> {
		if checked {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("You must agree to the terms");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for TermsValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates a Brazilian CPF number by its two check digits.
///
/// Mask punctuation is stripped before checking; the remaining value
/// must be exactly 11 digits with both check digits correct.
///
/// # Examples
///
/// ```
/// use leadform::validators::CpfValidator;
///
/// let validator = CpfValidator::new();
/// assert!(validator.validate("529.982.247-25").is_ok());
/// assert!(validator.validate("52998224725").is_ok());
/// assert!(validator.validate("52998224724").is_err());
/// assert!(validator.validate("123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CpfValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl CpfValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let digits = digits_only(value);
		if digits.len() == 11 && cpf_check_digits_ok(&digits) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid CPF");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for CpfValidator {
	fn default() -> Self {
		Self::new()
	}
}

// Standard CPF check-digit scheme: digit 10 is validated over the
// first 9 digits with weights 10..2, digit 11 over the first 10 with
// weights 11..2; a remainder of 10 or 11 maps to 0.
fn cpf_check_digits_ok(digits: &str) -> bool {
	let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
	if d.len() != 11 {
		return false;
	}

	let check = |take: usize, start_weight: u32| -> u32 {
		let sum: u32 = d[..take]
			.iter()
			.enumerate()
			.map(|(i, digit)| digit * (start_weight - i as u32))
			.sum();
		let remainder = (sum * 10) % 11;
		if remainder >= 10 { 0 } else { remainder }
	};

	check(9, 10) == d[9] && check(10, 11) == d[10]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldError;
	use proptest::prelude::*;
	use rstest::rstest;

	// =========================================================================
	// NameValidator tests
	// =========================================================================

	#[rstest]
	#[case("Maria")]
	#[case("Maria Silva")]
	#[case("José")]
	#[case("Ana Luíza de Souza")]
	#[case("李明")]
	#[case("  Bo  ")]
	fn test_name_validator_valid(#[case] name: &str) {
		// Arrange
		let validator = NameValidator::new();

		// Act
		let result = validator.validate(name);

		// Assert
		assert!(result.is_ok(), "Expected '{name}' to be a valid name");
	}

	#[rstest]
	#[case("")]
	#[case("M")]
	#[case("  A  ")]
	#[case("Maria123")]
	#[case("R2-D2")]
	#[case("john@doe")]
	fn test_name_validator_invalid(#[case] name: &str) {
		// Arrange
		let validator = NameValidator::new();

		// Act
		let result = validator.validate(name);

		// Assert
		assert!(result.is_err(), "Expected '{name}' to be an invalid name");
	}

	#[rstest]
	fn test_name_validator_custom_message() {
		// Arrange
		let validator = NameValidator::new().with_message("Tell us your name");

		// Act
		let result = validator.validate("X");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, "Tell us your name"),
			_ => panic!("Expected Validation error with custom message"),
		}
	}

	// =========================================================================
	// PhoneValidator tests
	// =========================================================================

	#[rstest]
	#[case("1133334444")]
	#[case("11999998888")]
	#[case("(11) 99999-8888")]
	#[case("(11) 3333-4444")]
	fn test_phone_validator_valid(#[case] phone: &str) {
		// Arrange
		let validator = PhoneValidator::new();

		// Act
		let result = validator.validate(phone);

		// Assert
		assert!(result.is_ok(), "Expected '{phone}' to be a valid phone");
	}

	// +55 adds two country digits: 13 digits total is over the limit
	#[rstest]
	#[case("")]
	#[case("119999")]
	#[case("113333444")]
	#[case("119999988887")]
	#[case("+55 (11) 99999-8888")]
	fn test_phone_validator_invalid(#[case] phone: &str) {
		// Arrange
		let validator = PhoneValidator::new();

		// Act
		let result = validator.validate(phone);

		// Assert
		assert!(result.is_err(), "Expected '{phone}' to be an invalid phone");
	}

	// =========================================================================
	// EmailValidator tests
	// =========================================================================

	#[rstest]
	#[case("a@b.c")]
	#[case("maria@example.com")]
	#[case("maria.silva+promo@sub.example.com.br")]
	#[case("  maria@example.com  ")]
	fn test_email_validator_valid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_ok(), "Expected '{email}' to be a valid e-mail");
	}

	#[rstest]
	#[case("")]
	#[case("abc")]
	#[case("a@b")]
	#[case("a b@c.d")]
	#[case("a@b@c.d")]
	#[case("@example.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_err(), "Expected '{email}' to be an invalid e-mail");
	}

	// =========================================================================
	// TermsValidator tests
	// =========================================================================

	#[rstest]
	fn test_terms_validator() {
		// Arrange
		let validator = TermsValidator::new();

		// Act & Assert
		assert!(validator.validate(true).is_ok());
		assert!(validator.validate(false).is_err());
	}

	// =========================================================================
	// CpfValidator tests
	// =========================================================================

	#[rstest]
	#[case("52998224725")]
	#[case("529.982.247-25")]
	fn test_cpf_validator_valid(#[case] cpf: &str) {
		// Arrange
		let validator = CpfValidator::new();

		// Act
		let result = validator.validate(cpf);

		// Assert
		assert!(result.is_ok(), "Expected '{cpf}' to be a valid CPF");
	}

	#[rstest]
	#[case("")]
	#[case("123")]
	#[case("52998224724")]
	#[case("52998224735")]
	#[case("529982247250")]
	fn test_cpf_validator_invalid(#[case] cpf: &str) {
		// Arrange
		let validator = CpfValidator::new();

		// Act
		let result = validator.validate(cpf);

		// Assert
		assert!(result.is_err(), "Expected '{cpf}' to be an invalid CPF");
	}

	// =========================================================================
	// Property tests
	// =========================================================================

	proptest! {
		#[test]
		fn prop_phone_digit_count_decides_validity(digits in "[0-9]{0,14}") {
			let validator = PhoneValidator::new();
			let valid = (10..=11).contains(&digits.len());
			prop_assert_eq!(validator.validate(&digits).is_ok(), valid);
		}

		#[test]
		fn prop_letter_names_of_length_two_or_more_are_valid(
			name in "[a-zA-Z]{2,12}( [a-zA-Z]{1,12})?",
		) {
			let validator = NameValidator::new();
			prop_assert!(validator.validate(&name).is_ok());
		}
	}
}
