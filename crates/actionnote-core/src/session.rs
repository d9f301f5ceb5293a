//! Per-session holder for the most recent artifacts.
//!
//! A [`Session`] owns a generator, a calendar builder and the last
//! successful result of each. It is a plain value owned by whoever serves
//! a user (one per CLI invocation, one per MCP connection) and is never
//! shared process-wide.

use jiff::civil::Date;
use log::{debug, info};

use crate::{
    calendar::{default_title, CalendarEventBuilder},
    error::Result,
    generator::ArtifactGenerator,
    models::{ArtifactBundle, CalendarEvent, Locale},
    params::{BuildEvent, GenerateArtifacts},
};

/// Last generated bundle and event for one user.
#[derive(Debug, Clone)]
pub struct Session {
    generator: ArtifactGenerator,
    calendar: CalendarEventBuilder,
    last_bundle: Option<ArtifactBundle>,
    last_event: Option<CalendarEvent>,
}

impl Session {
    /// Creates an empty session for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self::with_components(
            ArtifactGenerator::new().with_locale(locale),
            CalendarEventBuilder::for_locale(locale),
        )
    }

    /// Creates an empty session from preconfigured components.
    pub fn with_components(generator: ArtifactGenerator, calendar: CalendarEventBuilder) -> Self {
        Self {
            generator,
            calendar,
            last_bundle: None,
            last_event: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.generator.locale()
    }

    /// Validates the request, generates a bundle and remembers it.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::InvalidInput` - When the request parameters are
    ///   out of range; the previous bundle is kept
    pub fn generate(&mut self, request: &GenerateArtifacts) -> Result<&ArtifactBundle> {
        let params = request.validate()?;
        let bundle = self.generator.generate(&request.text, &params);
        info!("Generated bundle with {} action items", bundle.actions.len());
        Ok(&*self.last_bundle.insert(bundle))
    }

    /// Builds a calendar event and remembers it.
    ///
    /// `today` is used when the request carries no date.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::Format` - When the date or time range is malformed
    /// * `ActionNoteError::InvalidRange` - When the range is inverted and the
    ///   builder rejects it
    ///
    /// On error the previously generated bundle and event are left untouched.
    pub fn build_event(&mut self, request: &BuildEvent, today: Date) -> Result<&CalendarEvent> {
        let date = request.parsed_date()?.unwrap_or(today);
        let title = request
            .title
            .as_deref()
            .unwrap_or_else(|| default_title(self.locale()));
        let event = self.calendar.build(date, &request.time_range, title)?;
        debug!("Session stored event {}", event.uid);
        Ok(&*self.last_event.insert(event))
    }

    pub fn last_bundle(&self) -> Option<&ArtifactBundle> {
        self.last_bundle.as_ref()
    }

    pub fn last_event(&self) -> Option<&CalendarEvent> {
        self.last_event.as_ref()
    }

    /// Forget all stored results.
    pub fn clear(&mut self) {
        self.last_bundle = None;
        self.last_event = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
