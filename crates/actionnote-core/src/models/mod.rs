//! Data models for meeting artifacts and calendar events.
//!
//! This module contains the value objects produced by the generator and the
//! calendar builder. Display implementations live in
//! [`crate::display::models`], and the iCalendar rendering of
//! [`CalendarEvent`] lives in [`crate::calendar::ics`].
//!
//! All models are immutable once created and derive `Serialize` so the CLI
//! and MCP layers can emit them as JSON.
//!
//! # Examples
//!
//! ```rust
//! use actionnote_core::models::{ActionItem, ActionTable, Locale, Priority};
//! use jiff::civil::date;
//!
//! let table = ActionTable::new(vec![ActionItem {
//!     task: "Wireframe production".to_string(),
//!     owner: "Designer Kim".to_string(),
//!     due_date: date(2024, 1, 8),
//!     priority: Priority::High,
//! }]);
//! assert_eq!(table.len(), 1);
//! assert_eq!(table[0].priority.label(Locale::En), "High");
//! ```

pub mod action;
pub mod bundle;
pub mod event;
pub mod options;


pub use action::{ActionItem, ActionTable};
pub use bundle::ArtifactBundle;
pub use event::CalendarEvent;
pub use options::{DurationPreset, Locale, Priority};
