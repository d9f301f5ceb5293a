//! Calendar event construction.
//!
//! [`CalendarEventBuilder`] combines a date and an `HH:MM-HH:MM` slot into a
//! [`CalendarEvent`] that renders as a single-event iCalendar document (see
//! [`ics`]). Start and end are naive local date-times; no timezone is
//! attached.
//!
//! # Inverted ranges
//!
//! A slot whose end is not after its start is handled according to the
//! builder's [`RangePolicy`]. The default rejects it with
//! [`ActionNoteError::InvalidRange`]; [`RangePolicy::PassThrough`] emits the
//! event unchanged.
//!
//! # Examples
//!
//! ```rust
//! use actionnote_core::CalendarEventBuilder;
//! use jiff::civil::date;
//!
//! let event = CalendarEventBuilder::new().build(date(2024, 1, 1), "09:00-09:30", "Standup")?;
//! let ics = event.to_ics();
//! assert!(ics.contains("DTSTART:20240101T090000\r\n"));
//! assert!(ics.contains("DTEND:20240101T093000\r\n"));
//! # Ok::<(), actionnote_core::ActionNoteError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::{civil::Date, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};

pub mod ics;
mod time_range;

pub use time_range::TimeRange;

use crate::{
    error::{ActionNoteError, Result},
    models::{CalendarEvent, Locale},
};

/// Process-wide counter appended to UIDs so two events stamped in the same
/// microsecond still differ.
static UID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// What to do with a slot whose end is not after its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Fail with `InvalidRange`
    #[default]
    Reject,

    /// Emit the event as given
    PassThrough,
}

/// Default event title for a locale.
pub fn default_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "ActionNote Action",
        Locale::Ko => "액션 수행 시간",
    }
}

fn default_description(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Automatically generated action schedule",
        Locale::Ko => "자동 생성된 액션 일정",
    }
}

/// Builder for calendar events with configurable identity fields.
#[derive(Debug, Clone)]
pub struct CalendarEventBuilder {
    product: String,
    product_suffix: String,
    namespace: String,
    description: String,
    range_policy: RangePolicy,
}

impl CalendarEventBuilder {
    /// Creates a builder with English defaults.
    pub fn new() -> Self {
        Self::for_locale(Locale::En)
    }

    /// Creates a builder whose fixed description uses the given locale.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            product: "ActionNote".to_string(),
            product_suffix: "SaaS Prototype".to_string(),
            namespace: "actionnote".to_string(),
            description: default_description(locale).to_string(),
            range_policy: RangePolicy::default(),
        }
    }

    /// Sets the product name and suffix used in `PRODID`.
    pub fn with_product(mut self, product: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.product = product.into();
        self.product_suffix = suffix.into();
        self
    }

    /// Sets the domain-like namespace appended to UIDs.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the fixed `DESCRIPTION` line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    /// `PRODID` value, e.g. `-//ActionNote//SaaS Prototype//EN`.
    pub fn product_id(&self) -> String {
        format!("-//{}//{}//EN", self.product, self.product_suffix)
    }

    /// Builds an event stamped with the current instant.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::Format` - When `time_range` is not `HH:MM-HH:MM`
    /// * `ActionNoteError::InvalidRange` - When end is not after start and
    ///   the policy is [`RangePolicy::Reject`]
    pub fn build(&self, date: Date, time_range: &str, title: &str) -> Result<CalendarEvent> {
        self.build_at(date, time_range, title, Timestamp::now())
    }

    /// Builds an event with an explicit `DTSTAMP` instant.
    ///
    /// # Errors
    ///
    /// Same as [`CalendarEventBuilder::build`].
    pub fn build_at(
        &self,
        date: Date,
        time_range: &str,
        title: &str,
        stamp: Timestamp,
    ) -> Result<CalendarEvent> {
        let range = TimeRange::parse(time_range)?;

        if !range.is_forward() {
            match self.range_policy {
                RangePolicy::Reject => {
                    return Err(ActionNoteError::InvalidRange {
                        start: range.start,
                        end: range.end,
                    });
                }
                RangePolicy::PassThrough => {
                    debug!("build: passing through inverted range {range}");
                }
            }
        }

        let event = CalendarEvent {
            uid: self.next_uid(stamp),
            stamp,
            start: date.to_datetime(range.start),
            end: date.to_datetime(range.end),
            summary: title.to_string(),
            description: self.description.clone(),
            product_id: self.product_id(),
        };
        debug!("build: event {} on {date} {range}", event.uid);
        Ok(event)
    }

    fn next_uid(&self, stamp: Timestamp) -> String {
        let sequence = UID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        format!(
            "{}.{:06}.{}@{}",
            stamp.as_second(),
            stamp.subsec_microsecond(),
            sequence,
            self.namespace
        )
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
