//! Calendar event model.

use jiff::{civil::DateTime, Timestamp};
use serde::{Deserialize, Serialize};

/// A single scheduled event ready to be written as an iCalendar document.
///
/// Start and end are naive local date-times; only the stamp is an absolute
/// UTC instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Unique identifier including the namespace, e.g. `1704067200.000000.1@actionnote`
    pub uid: String,

    /// Instant the event object was created (UTC)
    pub stamp: Timestamp,

    /// Naive start date-time
    pub start: DateTime,

    /// Naive end date-time
    pub end: DateTime,

    /// Event title
    pub summary: String,

    /// Fixed descriptive line
    pub description: String,

    /// Product identifier, e.g. `-//ActionNote//SaaS Prototype//EN`
    pub product_id: String,
}

impl CalendarEvent {
    /// Length of the event; negative for pass-through inverted ranges.
    pub fn duration(&self) -> jiff::SignedDuration {
        self.start.duration_until(self.end)
    }

    /// Render the event as an iCalendar document.
    pub fn to_ics(&self) -> String {
        self.to_string()
    }
}
