//! iCalendar (RFC 5545) rendering for [`CalendarEvent`].
//!
//! Documents contain exactly one `VEVENT` and always list properties in the
//! same order. Lines end with CRLF and are folded at 75 octets. `DTSTART`
//! and `DTEND` are floating (no offset); `DTSTAMP` is UTC.

use std::fmt;

use crate::{
    display::{IcsDateTime, IcsTimestamp},
    models::CalendarEvent,
};

const CRLF: &str = "\r\n";
const MAX_LINE_OCTETS: usize = 75;

/// Escape a TEXT property value.
///
/// ```rust
/// use actionnote_core::calendar::ics::escape_text;
///
/// assert_eq!(escape_text("Sync; notes, v2\nnext"), "Sync\\; notes\\, v2\\nnext");
/// ```
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Write one content line, folding it so that no physical line exceeds 75
/// octets. Folds never split a UTF-8 sequence.
fn write_line(f: &mut fmt::Formatter<'_>, line: &str) -> fmt::Result {
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;
    while rest.len() > limit {
        let mut cut = limit;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        f.write_str(&rest[..cut])?;
        f.write_str(CRLF)?;
        f.write_str(" ")?;
        rest = &rest[cut..];
        // Continuation lines spend one octet on the leading space.
        limit = MAX_LINE_OCTETS - 1;
    }
    f.write_str(rest)?;
    f.write_str(CRLF)
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, "BEGIN:VCALENDAR")?;
        write_line(f, "VERSION:2.0")?;
        write_line(f, &format!("PRODID:{}", self.product_id))?;
        write_line(f, "BEGIN:VEVENT")?;
        write_line(f, &format!("UID:{}", self.uid))?;
        write_line(f, &format!("DTSTAMP:{}", IcsTimestamp(&self.stamp)))?;
        write_line(f, &format!("DTSTART:{}", IcsDateTime(&self.start)))?;
        write_line(f, &format!("DTEND:{}", IcsDateTime(&self.end)))?;
        write_line(f, &format!("SUMMARY:{}", escape_text(&self.summary)))?;
        write_line(f, &format!("DESCRIPTION:{}", escape_text(&self.description)))?;
        write_line(f, "END:VEVENT")?;
        write_line(f, "END:VCALENDAR")
    }
}
