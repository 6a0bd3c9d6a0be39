//! Lead submission: record capture, delivery sinks, and the guarded
//! submission workflow
//!
//! The workflow is a small state machine, `Idle -> Submitting -> Idle`.
//! A single attempt either succeeds or fails; there is no retry, the
//! caller resubmits. A second submit while one is pending is rejected
//! outright rather than silently queued.

use crate::analytics::{AnalyticsSink, ConversionEvent, NullSink};
use crate::form::{FormInput, ValidationFailure, validate_input};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::time::Duration;

/// Constant source tag stamped on every captured lead.
pub const SOURCE_TAG: &str = "landing-page";

/// Default endpoint path for [`HttpLeadSink`].
pub const DEFAULT_LEADS_PATH: &str = "/api/leads";

/// Simulated processing time for [`SimulatedSink`].
pub const SIMULATED_DELAY: Duration = Duration::from_secs(2);

/// The payload assembled from validated fields for sending to a
/// backend.
///
/// Only ever constructed from a fully valid form; exists for the
/// duration of one delivery attempt. `timestamp` serializes as an
/// ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
	pub name: String,
	pub whatsapp: String,
	pub email: String,
	pub timestamp: DateTime<Utc>,
	pub source: String,
}

impl SubmissionRecord {
	/// Builds the record from validated input: name and e-mail are
	/// trimmed, the whatsapp value is kept as displayed (masked).
	pub fn capture(input: &FormInput, timestamp: DateTime<Utc>) -> Self {
		Self {
			name: input.name.trim().to_string(),
			whatsapp: input.whatsapp.clone(),
			email: input.email.trim().to_string(),
			timestamp,
			source: SOURCE_TAG.to_string(),
		}
	}
}

/// Errors from delivering a record to a backend.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
	#[error("lead endpoint returned HTTP {0}")]
	Status(u16),
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),
}

/// Errors from [`SubmissionWorkflow::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	#[error("form failed validation, first invalid field: {}", .0.first_invalid)]
	Validation(ValidationFailure),
	#[error("a submission is already in flight")]
	InFlight,
	#[error(transparent)]
	Delivery(#[from] DeliveryError),
}

/// Where the workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
	Idle,
	Submitting,
}

/// A destination for captured leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
	async fn deliver(&self, record: &SubmissionRecord) -> Result<(), DeliveryError>;
}

/// Delivers leads as a JSON POST to an HTTP endpoint.
///
/// Any non-success status is an error; the response body is expected
/// to be JSON and is parsed to surface malformed replies.
///
/// # Examples
///
/// ```no_run
/// use leadform::{HttpLeadSink, SubmissionWorkflow};
///
/// let sink = HttpLeadSink::new("https://example.com/api/leads");
/// let workflow = SubmissionWorkflow::new(sink);
/// ```
pub struct HttpLeadSink {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpLeadSink {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}

	/// Uses a preconfigured client (timeouts, proxies, headers).
	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl LeadSink for HttpLeadSink {
	async fn deliver(&self, record: &SubmissionRecord) -> Result<(), DeliveryError> {
		let response = self
			.client
			.post(&self.endpoint)
			.json(record)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(DeliveryError::Status(status.as_u16()));
		}

		response.json::<serde_json::Value>().await?;
		Ok(())
	}
}

/// Stand-in sink that resolves after a fixed delay, for environments
/// without a backend wired up yet.
#[derive(Debug, Clone)]
pub struct SimulatedSink {
	delay: Duration,
}

impl SimulatedSink {
	pub fn new() -> Self {
		Self {
			delay: SIMULATED_DELAY,
		}
	}

	pub fn with_delay(delay: Duration) -> Self {
		Self { delay }
	}
}

impl Default for SimulatedSink {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl LeadSink for SimulatedSink {
	async fn deliver(&self, _record: &SubmissionRecord) -> Result<(), DeliveryError> {
		tokio::time::sleep(self.delay).await;
		Ok(())
	}
}

/// Drives a validated form through a single delivery attempt.
///
/// State machine: `Idle -> Submitting -> Idle`. Validation failures
/// never leave `Idle` and never build a record; delivery failures
/// return to `Idle` so the caller can resubmit. On success a
/// `form_submit` conversion event is emitted to the configured
/// analytics sink.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use leadform::{FormInput, SimulatedSink, SubmissionWorkflow, submission::SOURCE_TAG};
///
/// # tokio_test::block_on(async {
/// let workflow = SubmissionWorkflow::new(SimulatedSink::with_delay(Duration::from_millis(1)));
/// let record = workflow
///     .submit(&FormInput {
///         name: "Maria Silva".to_string(),
///         whatsapp: "(11) 99999-8888".to_string(),
///         email: "maria@example.com".to_string(),
///         terms_accepted: true,
///     })
///     .await
///     .unwrap();
/// assert_eq!(record.source, SOURCE_TAG);
/// # });
/// ```
pub struct SubmissionWorkflow<S> {
	sink: S,
	analytics: Box<dyn AnalyticsSink>,
	state: Mutex<SubmissionState>,
}

impl<S: LeadSink> SubmissionWorkflow<S> {
	pub fn new(sink: S) -> Self {
		Self {
			sink,
			analytics: Box::new(NullSink),
			state: Mutex::new(SubmissionState::Idle),
		}
	}

	/// Emits a `form_submit` event to this sink after each successful
	/// delivery.
	pub fn with_analytics(mut self, analytics: impl AnalyticsSink + 'static) -> Self {
		self.analytics = Box::new(analytics);
		self
	}

	pub fn state(&self) -> SubmissionState {
		*self.state.lock()
	}

	/// Validates the input atomically and, if it passes, captures a
	/// [`SubmissionRecord`] and delivers it through the sink.
	///
	/// Returns the delivered record, or:
	/// - [`SubmitError::Validation`] when any field is invalid (no
	///   record is built, state stays `Idle`);
	/// - [`SubmitError::InFlight`] when another submission is pending;
	/// - [`SubmitError::Delivery`] when the sink fails.
	pub async fn submit(&self, input: &FormInput) -> Result<SubmissionRecord, SubmitError> {
		if let Err(failure) = validate_input(input) {
			tracing::debug!(
				first_invalid = %failure.first_invalid,
				issues = failure.issues.len(),
				"signup rejected by validation"
			);
			return Err(SubmitError::Validation(failure));
		}

		{
			let mut state = self.state.lock();
			if *state == SubmissionState::Submitting {
				return Err(SubmitError::InFlight);
			}
			*state = SubmissionState::Submitting;
		}

		let record = SubmissionRecord::capture(input, Utc::now());
		tracing::debug!(email = %record.email, "delivering lead");

		let delivered = self.sink.deliver(&record).await;
		*self.state.lock() = SubmissionState::Idle;

		match delivered {
			Ok(()) => {
				tracing::info!(email = %record.email, source = %record.source, "lead submitted");
				self.analytics.record(&ConversionEvent::form_submit(&record));
				Ok(record)
			}
			Err(e) => {
				tracing::warn!(error = %e, "lead delivery failed");
				Err(e.into())
			}
		}
	}
}
