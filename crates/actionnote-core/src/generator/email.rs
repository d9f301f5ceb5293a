//! Email draft rendering.

use std::fmt::Write;

use super::fixture::MeetingCopy;
use crate::{display::ActionTableView, models::{ActionTable, Locale}};

/// Render the email body for a non-empty bundle.
///
/// Bullets are taken from the same copy that produced the summary and
/// decisions, and the table is rendered from the already computed action
/// rows, so the draft always agrees with the rest of the bundle.
pub(crate) fn render(copy: &MeetingCopy, actions: &ActionTable, locale: Locale) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_email(&mut out, copy, actions, locale);
    out
}

/// Render the email body for blank input.
pub(crate) fn render_empty(copy: &MeetingCopy) -> String {
    format!("{}\n\n{}", copy.email_heading, copy.no_input)
}

fn write_email(
    out: &mut String,
    copy: &MeetingCopy,
    actions: &ActionTable,
    locale: Locale,
) -> std::fmt::Result {
    writeln!(out, "{}", copy.email_subject)?;
    writeln!(out)?;
    for line in copy.email_greeting {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", copy.email_summary_heading)?;
    for bullet in copy.summary_bullets {
        writeln!(out, "- {bullet}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", copy.email_decisions_heading)?;
    for bullet in copy.decision_bullets {
        writeln!(out, "- {bullet}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", copy.email_actions_heading)?;
    write!(out, "{}", ActionTableView::new(actions, locale))?;
    writeln!(out)?;
    writeln!(out, "{}", copy.email_closing)
}
