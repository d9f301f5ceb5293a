//! Artifact generation from meeting notes.
//!
//! [`ArtifactGenerator`] turns raw notes into an [`ArtifactBundle`]. The
//! current generator is a fixed transform: any non-blank input produces the
//! same summary, decisions and three action rows, and only the due dates
//! change with `deadline_days`. Blank input produces an explicit "no input"
//! bundle instead of an error.
//!
//! The bundle is a regression fixture for the `generate` contract. A future
//! generator that actually reads the notes must keep the same signature.
//!
//! # Due dates
//!
//! ```text
//! primary   = today + deadline_days
//! secondary = today + max(1, deadline_days - 3)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use actionnote_core::{ArtifactGenerator, params::GenerationParams};
//! use jiff::civil::date;
//!
//! let generator = ArtifactGenerator::new();
//! let bundle = generator.generate_on("agenda notes", &GenerationParams::default(), date(2024, 1, 1));
//!
//! assert_eq!(bundle.actions.len(), 3);
//! assert_eq!(bundle.actions[0].due_date, date(2024, 1, 8));
//! assert_eq!(bundle.actions[1].due_date, date(2024, 1, 5));
//! ```

use jiff::{civil::Date, ToSpan, Zoned};
use log::debug;

mod email;
mod fixture;


pub use fixture::SAMPLE_NOTES;

use self::fixture::{Deadline, MeetingCopy};
use crate::{
    models::{ActionItem, ActionTable, ArtifactBundle, Locale},
    params::GenerationParams,
};

/// Generates summary, decisions, action table and email draft from notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactGenerator {
    locale: Locale,
}

impl ArtifactGenerator {
    /// Creates a generator producing English copy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language of the generated copy.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Generates the bundle using today's local date.
    pub fn generate(&self, text: &str, params: &GenerationParams) -> ArtifactBundle {
        self.generate_on(text, params, Zoned::now().date())
    }

    /// Generates the bundle relative to an explicit `today`.
    ///
    /// Output is a pure function of the arguments and the locale.
    pub fn generate_on(&self, text: &str, params: &GenerationParams, today: Date) -> ArtifactBundle {
        let copy = MeetingCopy::for_locale(self.locale);

        if text.trim().is_empty() {
            debug!("generate: blank input, returning empty bundle");
            return ArtifactBundle {
                summary: format!("{}\n- {}\n", copy.summary_heading, copy.no_input),
                decisions: format!("- {}\n", copy.no_input),
                actions: ActionTable::default(),
                email_draft: email::render_empty(copy),
            };
        }

        debug!(
            "generate: {} chars, deadline {} days, duration {} min",
            text.chars().count(),
            params.deadline_days(),
            params.duration().minutes()
        );

        let (primary, secondary) = due_dates(today, params.deadline_days());
        let actions = ActionTable::new(
            copy.rows
                .iter()
                .map(|row| ActionItem {
                    task: row.task.to_string(),
                    owner: row.owner.to_string(),
                    due_date: match row.deadline {
                        Deadline::Primary => primary,
                        Deadline::Secondary => secondary,
                    },
                    priority: row.priority,
                })
                .collect(),
        );

        ArtifactBundle {
            summary: bullet_section(copy.summary_heading, &copy.summary_bullets),
            decisions: bullet_section(copy.decisions_heading, &copy.decision_bullets),
            email_draft: email::render(copy, &actions, self.locale),
            actions,
        }
    }
}

/// Computes the primary and secondary due dates.
fn due_dates(today: Date, deadline_days: i64) -> (Date, Date) {
    let primary = today.saturating_add(deadline_days.days());
    let secondary = today.saturating_add((deadline_days - 3).max(1).days());
    (primary, secondary)
}

fn bullet_section(heading: &str, bullets: &[&str]) -> String {
    let mut out = format!("{heading}\n");
    for bullet in bullets {
        out.push_str("- ");
        out.push_str(bullet);
        out.push('\n');
    }
    out
}
