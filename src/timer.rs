//! Owned page timers: urgency countdown and engagement tracking
//!
//! Both timers are plain owned objects driven by the caller's tick
//! (one second in the page). They hold no global state and need no
//! teardown; their lifetime is the page's lifetime.

use crate::analytics::{ConversionEvent, events};
use serde_json::json;
use std::fmt;
use std::time::{Duration, Instant};

/// Default urgency window: 24 hours.
pub const COUNTDOWN_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Hours/minutes/seconds left in the urgency window.
///
/// Renders zero-padded as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use leadform::timer::CountdownDisplay;
/// use std::time::Duration;
///
/// let display = CountdownDisplay::from(Duration::from_secs(3 * 3600 + 7 * 60 + 9));
/// assert_eq!(display.to_string(), "03:07:09");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownDisplay {
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl From<Duration> for CountdownDisplay {
	fn from(left: Duration) -> Self {
		let total = left.as_secs();
		Self {
			hours: total / 3600,
			minutes: (total % 3600) / 60,
			seconds: total % 60,
		}
	}
}

impl fmt::Display for CountdownDisplay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
	}
}

/// Rolling urgency countdown.
///
/// Counts down a fixed window; when the deadline passes, a fresh full
/// window starts, so the display never goes negative and never stays
/// at zero.
///
/// # Examples
///
/// ```
/// use leadform::timer::CountdownTimer;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut timer = CountdownTimer::starting_at(Duration::from_secs(60), start);
///
/// let display = timer.display_at(start + Duration::from_secs(15));
/// assert_eq!(display.to_string(), "00:00:45");
/// ```
#[derive(Debug, Clone)]
pub struct CountdownTimer {
	window: Duration,
	deadline: Instant,
}

impl CountdownTimer {
	/// Starts a countdown over the default 24-hour window.
	pub fn new() -> Self {
		Self::starting_at(COUNTDOWN_WINDOW, Instant::now())
	}

	pub fn with_window(window: Duration) -> Self {
		Self::starting_at(window, Instant::now())
	}

	pub fn starting_at(window: Duration, now: Instant) -> Self {
		Self {
			window,
			deadline: now + window,
		}
	}

	/// Remaining time at `now`, restarting the window on expiry.
	pub fn display_at(&mut self, now: Instant) -> CountdownDisplay {
		if now >= self.deadline {
			self.deadline = now + self.window;
		}
		CountdownDisplay::from(self.deadline - now)
	}

	/// Remaining time right now.
	pub fn display(&mut self) -> CountdownDisplay {
		self.display_at(Instant::now())
	}
}

impl Default for CountdownTimer {
	fn default() -> Self {
		Self::new()
	}
}

/// Time-on-page milestones that count as engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementMilestone {
	ThirtySeconds,
	OneMinute,
	TwoMinutes,
}

impl EngagementMilestone {
	pub const ALL: [EngagementMilestone; 3] = [
		EngagementMilestone::ThirtySeconds,
		EngagementMilestone::OneMinute,
		EngagementMilestone::TwoMinutes,
	];

	pub fn threshold(&self) -> Duration {
		match self {
			EngagementMilestone::ThirtySeconds => Duration::from_secs(30),
			EngagementMilestone::OneMinute => Duration::from_secs(60),
			EngagementMilestone::TwoMinutes => Duration::from_secs(120),
		}
	}

	pub fn event_name(&self) -> &'static str {
		match self {
			EngagementMilestone::ThirtySeconds => events::ENGAGEMENT_30S,
			EngagementMilestone::OneMinute => events::ENGAGEMENT_1MIN,
			EngagementMilestone::TwoMinutes => events::ENGAGEMENT_2MIN,
		}
	}

	pub fn event(&self) -> ConversionEvent {
		ConversionEvent::new(
			self.event_name(),
			json!({ "seconds_on_page": self.threshold().as_secs() }),
		)
	}
}

/// Watches elapsed time on the page and yields each engagement
/// milestone exactly once.
///
/// A milestone fires as soon as the observed elapsed time crosses its
/// threshold, even when ticks are missed, so a browser tab that was
/// backgrounded still reports the milestones it earned.
///
/// # Examples
///
/// ```
/// use leadform::timer::{EngagementMilestone, EngagementTracker};
/// use std::time::Duration;
///
/// let mut tracker = EngagementTracker::new();
/// assert!(tracker.observe(Duration::from_secs(29)).is_empty());
/// assert_eq!(
///     tracker.observe(Duration::from_secs(31)),
///     vec![EngagementMilestone::ThirtySeconds],
/// );
/// // Already fired; nothing on later ticks
/// assert!(tracker.observe(Duration::from_secs(45)).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngagementTracker {
	fired: [bool; 3],
}

impl EngagementTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reports the milestones newly crossed at `elapsed`, in
	/// threshold order.
	pub fn observe(&mut self, elapsed: Duration) -> Vec<EngagementMilestone> {
		let mut crossed = Vec::new();
		for (slot, milestone) in EngagementMilestone::ALL.into_iter().enumerate() {
			if !self.fired[slot] && elapsed >= milestone.threshold() {
				self.fired[slot] = true;
				crossed.push(milestone);
			}
		}
		crossed
	}
}
