//! Core library for ActionNote.
//!
//! ActionNote turns meeting notes into four artifacts (a summary, a list of
//! decisions, an action table and an email draft) and builds a single-event
//! iCalendar document for a chosen time slot.
//!
//! The crate has two independent, stateless components:
//!
//! - [`ArtifactGenerator`] ([`generator`]): notes + parameters →
//!   [`ArtifactBundle`]
//! - [`CalendarEventBuilder`] ([`calendar`]): date + `HH:MM-HH:MM` + title →
//!   [`CalendarEvent`]
//!
//! and a few supporting pieces:
//!
//! - [`Session`]: per-user holder of the last results
//! - [`input`]: reading notes from text, files, stdin or the demo sample
//! - [`params`]: interface-agnostic request types and boundary validation
//! - [`display`]: markdown and iCalendar formatting
//!
//! # Quick Start
//!
//! ```rust
//! use actionnote_core::{
//!     params::GenerationParams, ArtifactGenerator, CalendarEventBuilder, DurationPreset,
//! };
//! use jiff::civil::date;
//!
//! let params = GenerationParams::new(DurationPreset::Standard, 7)?;
//! let bundle = ArtifactGenerator::new().generate("agenda notes", &params);
//! println!("{}", bundle.email_draft);
//!
//! let event = CalendarEventBuilder::new().build(date(2024, 1, 1), "09:00-09:30", "Follow-up")?;
//! println!("{event}");
//! # Ok::<(), actionnote_core::ActionNoteError>(())
//! ```

pub mod calendar;
pub mod display;
pub mod error;
pub mod generator;
pub mod input;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use calendar::{CalendarEventBuilder, RangePolicy, TimeRange};
pub use display::{ActionTableView, BundleView, OperationStatus};
pub use error::{ActionNoteError, Result};
pub use generator::{ArtifactGenerator, SAMPLE_NOTES};
pub use input::InputSource;
pub use models::{
    ActionItem, ActionTable, ArtifactBundle, CalendarEvent, DurationPreset, Locale, Priority,
};
pub use params::{BuildEvent, GenerateArtifacts, GenerationParams};
pub use session::Session;
