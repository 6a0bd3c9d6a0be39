//! Typed UI event payloads and the form controller
//!
//! The UI layer translates raw DOM events into these payloads; the
//! controller applies the input mask, keeps the bound form in sync,
//! and hands back the field state the UI should render.

use crate::field::{FieldKind, FieldState};
use crate::form::{FormInput, SignupForm};
use crate::format::format_phone_input;

/// A keystroke in a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
	pub field: FieldKind,
	pub value: String,
}

/// Focus leaving a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurEvent {
	pub field: FieldKind,
}

/// The terms checkbox being toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermsChangeEvent {
	pub checked: bool,
}

/// What the UI should do after an input event: the text to display
/// (masked for the whatsapp field) and, when the field revalidates
/// live, its fresh state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEffect {
	pub display_value: String,
	/// `None` means the event only cleared the inline error; the
	/// field revalidates on the next blur.
	pub state: Option<FieldState>,
}

/// Wires typed UI events to a [`SignupForm`].
///
/// Behavior per field mirrors the page: the whatsapp field masks and
/// revalidates on every keystroke; name and e-mail clear their inline
/// error while typing and revalidate on blur; the terms checkbox
/// revalidates on change.
///
/// # Examples
///
/// ```
/// use leadform::{FieldKind, FormController, InputEvent};
///
/// let mut controller = FormController::new();
/// let effect = controller.on_input(InputEvent {
///     field: FieldKind::Whatsapp,
///     value: "11999998888".to_string(),
/// });
///
/// assert_eq!(effect.display_value, "(11) 99999-8888");
/// assert!(effect.state.unwrap().is_valid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormController {
	form: SignupForm,
}

impl FormController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn form(&self) -> &SignupForm {
		&self.form
	}

	pub fn input(&self) -> &FormInput {
		self.form.input()
	}

	/// Handles a keystroke, returning the text to display and any
	/// fresh field state.
	pub fn on_input(&mut self, event: InputEvent) -> InputEffect {
		match event.field {
			FieldKind::Whatsapp => {
				let display = format_phone_input(&event.value);
				self.form.input_mut().whatsapp = display.clone();
				let state = self.form.validate_field(FieldKind::Whatsapp).clone();
				InputEffect {
					display_value: display,
					state: Some(state),
				}
			}
			FieldKind::Name => {
				self.form.input_mut().name = event.value.clone();
				self.form.clear_error(FieldKind::Name);
				InputEffect {
					display_value: event.value,
					state: None,
				}
			}
			FieldKind::Email => {
				self.form.input_mut().email = event.value.clone();
				self.form.clear_error(FieldKind::Email);
				InputEffect {
					display_value: event.value,
					state: None,
				}
			}
			// The checkbox has no text input; nothing to do
			FieldKind::Terms => InputEffect {
				display_value: event.value,
				state: None,
			},
		}
	}

	/// Handles focus leaving a field by revalidating it.
	pub fn on_blur(&mut self, event: BlurEvent) -> FieldState {
		self.form.validate_field(event.field).clone()
	}

	/// Handles the terms checkbox toggling.
	pub fn on_terms_change(&mut self, event: TermsChangeEvent) -> FieldState {
		self.form.input_mut().terms_accepted = event.checked;
		self.form.validate_field(FieldKind::Terms).clone()
	}

	/// Runs the atomic submit-time pass over the whole form.
	pub fn validate_all(&mut self) -> bool {
		self.form.validate()
	}
}
