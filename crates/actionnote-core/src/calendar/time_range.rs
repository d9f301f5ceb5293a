//! Parsing of `HH:MM-HH:MM` time slots.

use std::{fmt, str::FromStr};

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::error::{ActionNoteError, Result};

const FIELD: &str = "time_range";

/// Start and end time-of-day of a slot, as written by the user.
///
/// Parsing only checks the shape and that both halves are valid times of day;
/// whether `end` is after `start` is decided by the builder's
/// [`RangePolicy`](super::RangePolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Time,
    pub end: Time,
}

impl TimeRange {
    /// Parse a strict `HH:MM-HH:MM` string.
    ///
    /// Whitespace around each half is ignored. Hours must be two digits in
    /// 00..=23 and minutes two digits in 00..=59.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::Format` - When the separator is missing or
    ///   repeated, or either half is not a valid `HH:MM` time
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionnote_core::calendar::TimeRange;
    /// use jiff::civil::time;
    ///
    /// let range = TimeRange::parse("09:00-09:30")?;
    /// assert_eq!(range.start, time(9, 0, 0, 0));
    /// assert_eq!(range.end, time(9, 30, 0, 0));
    ///
    /// assert!(TimeRange::parse("9:00-9:30am").is_err());
    /// assert!(TimeRange::parse("25:00-26:00").is_err());
    /// # Ok::<(), actionnote_core::ActionNoteError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let (start, end) = input.split_once('-').ok_or_else(|| {
            ActionNoteError::format(FIELD, input).with_reason("expected HH:MM-HH:MM")
        })?;
        if end.contains('-') {
            return Err(ActionNoteError::format(FIELD, input)
                .with_reason("expected exactly one '-' separator"));
        }

        Ok(Self {
            start: parse_time(input, start)?,
            end: parse_time(input, end)?,
        })
    }

    /// True when the end is strictly after the start.
    pub fn is_forward(&self) -> bool {
        self.end > self.start
    }
}

fn parse_time(input: &str, half: &str) -> Result<Time> {
    let half = half.trim();
    let bytes = half.as_bytes();
    let well_shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_shaped {
        return Err(ActionNoteError::format(FIELD, input)
            .with_reason(format!("'{half}' is not a two-digit HH:MM time")));
    }

    Time::strptime("%H:%M", half).map_err(|e| {
        ActionNoteError::format(FIELD, input)
            .with_reason(format!("'{half}' is not a valid time of day: {e}"))
    })
}

impl FromStr for TimeRange {
    type Err = ActionNoteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.strftime("%H:%M"),
            self.end.strftime("%H:%M")
        )
    }
}
