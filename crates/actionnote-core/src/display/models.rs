//! Display implementations for domain models.
//!
//! Enums display as their stable machine names. Bundles need a locale for
//! headings and priority labels, so they are displayed through
//! [`BundleView`].

use std::fmt;

use super::ActionTableView;
use crate::models::{ArtifactBundle, DurationPreset, Locale, Priority};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DurationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

struct Headings {
    actions: &'static str,
    no_actions: &'static str,
    email: &'static str,
}

fn headings(locale: Locale) -> Headings {
    match locale {
        Locale::En => Headings {
            actions: "### Action Table",
            no_actions: "_No action items._",
            email: "### Email Preview",
        },
        Locale::Ko => Headings {
            actions: "### 액션 테이블",
            no_actions: "_액션 항목 없음_",
            email: "### 메일 미리보기",
        },
    }
}

/// Full markdown rendering of a bundle: summary, decisions, action table and
/// the email draft in a fenced block.
pub struct BundleView<'a> {
    bundle: &'a ArtifactBundle,
    locale: Locale,
}

impl<'a> BundleView<'a> {
    pub fn new(bundle: &'a ArtifactBundle, locale: Locale) -> Self {
        Self { bundle, locale }
    }
}

impl fmt::Display for BundleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headings = headings(self.locale);

        writeln!(f, "{}", self.bundle.summary.trim_end())?;
        writeln!(f)?;
        writeln!(f, "{}", self.bundle.decisions.trim_end())?;
        writeln!(f)?;

        writeln!(f, "{}", headings.actions)?;
        writeln!(f)?;
        if self.bundle.actions.is_empty() {
            writeln!(f, "{}", headings.no_actions)?;
        } else {
            write!(f, "{}", ActionTableView::new(&self.bundle.actions, self.locale))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", headings.email)?;
        writeln!(f)?;
        writeln!(f, "```markdown")?;
        writeln!(f, "{}", self.bundle.email_draft.trim_end())?;
        writeln!(f, "```")
    }
}
