//! Conversion tracking events and sinks
//!
//! Events are fire-and-forget: sinks get a name and a free-form JSON
//! payload and promise nothing back. The page fans a single event out
//! to every configured pixel.

use crate::submission::SubmissionRecord;
use serde::Serialize;
use serde_json::{Value, json};

/// Event names emitted by the landing page.
pub mod events {
	pub const FORM_SUBMIT: &str = "form_submit";
	pub const CTA_CLICK: &str = "cta_click";
	pub const ENGAGEMENT_30S: &str = "engagement_30s";
	pub const ENGAGEMENT_1MIN: &str = "engagement_1min";
	pub const ENGAGEMENT_2MIN: &str = "engagement_2min";
}

/// A named conversion event with a free-form data payload.
///
/// # Examples
///
/// ```
/// use leadform::analytics::{ConversionEvent, events};
///
/// let event = ConversionEvent::cta_click("hero", "Quero entrar");
/// assert_eq!(event.name, events::CTA_CLICK);
/// assert_eq!(event.data["cta_location"], "hero");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionEvent {
	pub name: String,
	pub data: Value,
}

impl ConversionEvent {
	pub fn new(name: impl Into<String>, data: Value) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	/// The event fired after a lead was delivered successfully.
	pub fn form_submit(record: &SubmissionRecord) -> Self {
		Self::new(
			events::FORM_SUBMIT,
			serde_json::to_value(record).unwrap_or(Value::Null),
		)
	}

	/// A click on a call-to-action link, tagged with where it sits on
	/// the page and its visible text.
	pub fn cta_click(location: &str, text: &str) -> Self {
		Self::new(
			events::CTA_CLICK,
			json!({
				"cta_location": location,
				"cta_text": text.trim(),
			}),
		)
	}
}

/// A destination for conversion events.
///
/// Fire-and-forget: implementations must not block the caller on a
/// response, and failures are theirs to swallow or log.
pub trait AnalyticsSink: Send + Sync {
	fn record(&self, event: &ConversionEvent);
}

/// Sink that drops every event. Default for workflows that have no
/// tracking configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
	fn record(&self, _event: &ConversionEvent) {}
}

/// Sink that emits each event as a structured log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
	fn record(&self, event: &ConversionEvent) {
		tracing::info!(event = %event.name, data = %event.data, "conversion tracked");
	}
}

/// Fans each event out to every registered sink, in registration
/// order.
///
/// # Examples
///
/// ```
/// use leadform::analytics::{AnalyticsSink, ConversionEvent, FanoutSink, TracingSink};
///
/// let fanout = FanoutSink::new().with_sink(TracingSink);
/// fanout.record(&ConversionEvent::cta_click("header", "Entrar"));
/// ```
#[derive(Default)]
pub struct FanoutSink {
	sinks: Vec<Box<dyn AnalyticsSink>>,
}

impl FanoutSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_sink(mut self, sink: impl AnalyticsSink + 'static) -> Self {
		self.sinks.push(Box::new(sink));
		self
	}

	pub fn push(&mut self, sink: impl AnalyticsSink + 'static) {
		self.sinks.push(Box::new(sink));
	}

	pub fn len(&self) -> usize {
		self.sinks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sinks.is_empty()
	}
}

impl AnalyticsSink for FanoutSink {
	fn record(&self, event: &ConversionEvent) {
		for sink in &self.sinks {
			sink.record(event);
		}
	}
}


#[cfg(test)]
mod tests {
	use super::test_support::RecordingSink;
	use super::*;
	use crate::submission::{SOURCE_TAG, SubmissionRecord};
	use chrono::Utc;
	use rstest::rstest;

	#[rstest]
	fn test_cta_click_payload() {
		// Act
		let event = ConversionEvent::cta_click("hero", "  Quero entrar  ");

		// Assert
		assert_eq!(event.name, events::CTA_CLICK);
		assert_eq!(event.data["cta_location"], "hero");
		assert_eq!(event.data["cta_text"], "Quero entrar");
	}

	#[rstest]
	fn test_form_submit_carries_record() {
		// Arrange
		let record = SubmissionRecord {
			name: "Maria".to_string(),
			whatsapp: "(11) 99999-8888".to_string(),
			email: "maria@example.com".to_string(),
			timestamp: Utc::now(),
			source: SOURCE_TAG.to_string(),
		};

		// Act
		let event = ConversionEvent::form_submit(&record);

		// Assert
		assert_eq!(event.name, events::FORM_SUBMIT);
		assert_eq!(event.data["source"], SOURCE_TAG);
		assert_eq!(event.data["email"], "maria@example.com");
	}

	#[rstest]
	fn test_fanout_reaches_every_sink() {
		// Arrange
		let first = RecordingSink::new();
		let second = RecordingSink::new();
		let fanout = FanoutSink::new()
			.with_sink(first.clone())
			.with_sink(second.clone());

		// Act
		fanout.record(&ConversionEvent::cta_click("footer", "Entrar"));

		// Assert
		assert_eq!(first.events().len(), 1);
		assert_eq!(second.events().len(), 1);
		assert_eq!(first.events()[0].name, events::CTA_CLICK);
	}

	#[rstest]
	fn test_null_sink_swallows_events() {
		// No observable effect; just must not panic
		NullSink.record(&ConversionEvent::new("anything", serde_json::json!({})));
	}
}
