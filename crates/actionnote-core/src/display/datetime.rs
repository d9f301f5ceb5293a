//! Date-time formatting wrappers for iCalendar output.
//!
//! iCalendar uses the compact basic ISO 8601 form. Floating (naive)
//! date-times carry no suffix, UTC instants end in `Z`.

use std::fmt;

use jiff::{civil::DateTime, Timestamp};

/// Formats a naive date-time as `YYYYMMDDTHHMMSS`.
pub struct IcsDateTime<'a>(pub &'a DateTime);

impl<'a> fmt::Display for IcsDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y%m%dT%H%M%S"))
    }
}

/// Formats a timestamp in UTC as `YYYYMMDDTHHMMSSZ`.
pub struct IcsTimestamp<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for IcsTimestamp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y%m%dT%H%M%SZ"))
    }
}
