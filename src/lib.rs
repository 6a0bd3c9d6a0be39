//! Lead capture for marketing landing pages
//!
//! This crate is the typed core behind a landing page's signup flow:
//! - Per-field validation (name, WhatsApp, e-mail, terms) with inline
//!   error state, run incrementally on blur/input and atomically on
//!   submit
//! - Brazilian phone input masking (`(DD) DDDDD-DDDD`)
//! - A guarded asynchronous submission workflow
//!   (`Idle -> Submitting -> Idle`, concurrent submits rejected)
//! - Fire-and-forget conversion analytics events
//! - Owned page timers: urgency countdown and engagement milestones
//!
//! Rendering (DOM, CSS classes, modals) stays in the UI layer; it
//! feeds typed events in and renders the states this crate hands back.

pub mod analytics;
pub mod events;
pub mod field;
pub mod form;
pub mod format;
pub mod submission;
pub mod timer;
pub mod validators;

pub use analytics::{AnalyticsSink, ConversionEvent, FanoutSink, NullSink, TracingSink};
pub use events::{BlurEvent, FormController, InputEffect, InputEvent, TermsChangeEvent};
pub use field::{FieldError, FieldKind, FieldResult, FieldState};
pub use form::{FieldIssue, FormInput, SignupForm, ValidationFailure, validate_input};
pub use format::{format_phone, format_phone_input};
pub use submission::{
	DeliveryError, HttpLeadSink, LeadSink, SimulatedSink, SubmissionRecord, SubmissionState,
	SubmissionWorkflow, SubmitError,
};
pub use timer::{CountdownDisplay, CountdownTimer, EngagementMilestone, EngagementTracker};
pub use validators::{
	CpfValidator, EmailValidator, NameValidator, PhoneValidator, TermsValidator,
};
