use actionnote_core::{CalendarEventBuilder, GenerationParams};

/// Helper function to build default generation parameters for a deadline
#[allow(dead_code)]
pub fn params_with_deadline(deadline_days: i64) -> GenerationParams {
    GenerationParams::new(actionnote_core::DurationPreset::Standard, deadline_days)
        .expect("Failed to build generation params")
}

/// Helper function to create a builder with English defaults
#[allow(dead_code)]
pub fn english_builder() -> CalendarEventBuilder {
    CalendarEventBuilder::new()
}

/// Minimal iCalendar reader: unfolds continuation lines and unescapes TEXT
/// values, returning properties in document order.
#[allow(dead_code)]
pub fn parse_properties(ics: &str) -> Vec<(String, String)> {
    assert!(ics.ends_with("\r\n"), "document must end with CRLF");
    let unfolded = ics.replace("\r\n ", "");
    unfolded
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (name, value) = line.split_once(':').expect("property without ':'");
            (name.to_string(), unescape(value))
        })
        .collect()
}

fn unescape(value: &str) -> String {
    let mut out = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') | Some('N') => out.push('\n'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
