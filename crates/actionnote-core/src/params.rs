//! Parameter structures for ActionNote operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP) without framework-specific derives or
//! dependencies. Interface layers wrap these types with their own derives and
//! convert into them, keeping the core free of clap and rmcp.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Raw request structs ([`GenerateArtifacts`], [`BuildEvent`]) carry loosely
//! typed values as they arrive from the outside. Their `validate` methods are
//! the boundary where out-of-range values are rejected; past that point the
//! generator and builder only see validated types such as
//! [`GenerationParams`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ActionNoteError, Result},
    models::DurationPreset,
};

/// Smallest accepted deadline offset in days.
pub const MIN_DEADLINE_DAYS: i64 = 1;
/// Largest accepted deadline offset in days.
pub const MAX_DEADLINE_DAYS: i64 = 21;
/// Deadline offset used when none is given.
pub const DEFAULT_DEADLINE_DAYS: i64 = 7;

/// Recommended meeting slots offered to users.
pub const RECOMMENDED_SLOTS: [&str; 3] = ["09:00-09:30", "10:00-11:00", "14:00-15:00"];

/// Validated generation parameters.
///
/// Can only be built through [`GenerationParams::new`], so a value of this
/// type always carries a deadline within
/// [`MIN_DEADLINE_DAYS`]..=[`MAX_DEADLINE_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    duration: DurationPreset,
    deadline_days: u8,
}

impl GenerationParams {
    /// Validate and build generation parameters.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::InvalidInput` - When `deadline_days` is outside 1..=21
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionnote_core::{models::DurationPreset, params::GenerationParams};
    ///
    /// let params = GenerationParams::new(DurationPreset::Standard, 7)?;
    /// assert_eq!(params.deadline_days(), 7);
    ///
    /// assert!(GenerationParams::new(DurationPreset::Standard, 0).is_err());
    /// # Ok::<(), actionnote_core::ActionNoteError>(())
    /// ```
    pub fn new(duration: DurationPreset, deadline_days: i64) -> Result<Self> {
        if !(MIN_DEADLINE_DAYS..=MAX_DEADLINE_DAYS).contains(&deadline_days) {
            return Err(ActionNoteError::invalid_input("deadline_days").with_reason(format!(
                "Deadline must be between {MIN_DEADLINE_DAYS} and {MAX_DEADLINE_DAYS} days, got {deadline_days}"
            )));
        }
        let deadline_days = u8::try_from(deadline_days).map_err(|e| {
            ActionNoteError::invalid_input("deadline_days").with_reason(e.to_string())
        })?;
        Ok(Self {
            duration,
            deadline_days,
        })
    }

    pub fn duration(&self) -> DurationPreset {
        self.duration
    }

    pub fn deadline_days(&self) -> i64 {
        i64::from(self.deadline_days)
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            duration: DurationPreset::default(),
            deadline_days: DEFAULT_DEADLINE_DAYS as u8,
        }
    }
}

fn default_duration_minutes() -> u32 {
    DurationPreset::default().minutes()
}

fn default_deadline_days() -> i64 {
    DEFAULT_DEADLINE_DAYS
}

/// Parameters for generating the artifact bundle from meeting notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateArtifacts {
    /// Raw meeting notes (plain text or markdown). Blank text yields an
    /// explicit "no input" bundle.
    pub text: String,
    /// Expected effort per action item in minutes: 30, 60 or 90
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    /// Default deadline in days from today, between 1 and 21
    #[serde(default = "default_deadline_days")]
    pub deadline_days: i64,
}

impl Default for GenerateArtifacts {
    fn default() -> Self {
        Self {
            text: String::new(),
            duration_minutes: default_duration_minutes(),
            deadline_days: DEFAULT_DEADLINE_DAYS,
        }
    }
}

impl GenerateArtifacts {
    /// Validate the request and return the typed generation parameters.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::InvalidInput` - When the duration is not 30, 60 or 90
    /// * `ActionNoteError::InvalidInput` - When the deadline is outside 1..=21
    pub fn validate(&self) -> Result<GenerationParams> {
        let duration = DurationPreset::try_from(self.duration_minutes)?;
        GenerationParams::new(duration, self.deadline_days)
    }
}

/// Parameters for building a calendar event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BuildEvent {
    /// Event date as YYYY-MM-DD; defaults to today
    #[serde(default)]
    pub date: Option<String>,
    /// Time slot as HH:MM-HH:MM, e.g. "09:00-09:30"
    pub time_range: String,
    /// Event title; defaults to the locale's standard title
    #[serde(default)]
    pub title: Option<String>,
}

impl BuildEvent {
    /// Parse the optional date field.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::Format` - When the date is not a valid YYYY-MM-DD
    pub fn parsed_date(&self) -> Result<Option<jiff::civil::Date>> {
        self.date.as_deref().map(parse_date).transpose()
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// * `ActionNoteError::Format` - When the input is not a valid date
pub fn parse_date(input: &str) -> Result<jiff::civil::Date> {
    jiff::civil::Date::strptime("%Y-%m-%d", input.trim()).map_err(|e| {
        ActionNoteError::format("date", input).with_reason(format!("expected YYYY-MM-DD: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_generation_params_accepts_bounds() {
        let low = GenerationParams::new(DurationPreset::Light, 1).unwrap();
        assert_eq!(low.deadline_days(), 1);
        let high = GenerationParams::new(DurationPreset::Deep, 21).unwrap();
        assert_eq!(high.deadline_days(), 21);
        assert_eq!(high.duration(), DurationPreset::Deep);
    }

    #[test]
    fn test_generation_params_rejects_out_of_range() {
        for days in [0, -3, 22, 365] {
            match GenerationParams::new(DurationPreset::Standard, days).unwrap_err() {
                ActionNoteError::InvalidInput { field, reason } => {
                    assert_eq!(field, "deadline_days");
                    assert!(reason.contains(&days.to_string()));
                }
                other => panic!("Expected InvalidInput error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_generation_params_default() {
        let params = GenerationParams::default();
        assert_eq!(params.deadline_days(), 7);
        assert_eq!(params.duration().minutes(), 60);
    }

    #[test]
    fn test_generate_artifacts_validate_duration() {
        let request = GenerateArtifacts {
            text: "notes".to_string(),
            duration_minutes: 45,
            deadline_days: 7,
        };
        match request.validate().unwrap_err() {
            ActionNoteError::InvalidInput { field, .. } => assert_eq!(field, "duration_minutes"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_artifacts_deserialize_defaults() {
        let request: GenerateArtifacts = serde_json::from_str(r#"{"text": "agenda"}"#).unwrap();
        assert_eq!(request.duration_minutes, 60);
        assert_eq!(request.deadline_days, 7);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_build_event_parsed_date() {
        let request = BuildEvent {
            date: Some("2024-01-01".to_string()),
            time_range: "09:00-09:30".to_string(),
            title: None,
        };
        assert_eq!(request.parsed_date().unwrap(), Some(date(2024, 1, 1)));

        let request = BuildEvent::default();
        assert_eq!(request.parsed_date().unwrap(), None);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        for input in ["2024/01/01", "2024-13-01", "2024-02-30", "tomorrow"] {
            match parse_date(input).unwrap_err() {
                ActionNoteError::Format { field, .. } => assert_eq!(field, "date"),
                other => panic!("Expected Format error for {input}, got {other:?}"),
            }
        }
    }
}
