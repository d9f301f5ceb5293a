//! Markdown table rendering for action items.

use std::fmt;

use crate::models::{ActionTable, Locale};

/// Renders an [`ActionTable`] as a pipe-delimited markdown table.
///
/// Dates are printed as `YYYY-MM-DD` and priorities use the locale's labels.
///
/// ```rust
/// use actionnote_core::{display::ActionTableView, models::{ActionTable, Locale}};
///
/// let empty = ActionTable::default();
/// assert_eq!(
///     ActionTableView::new(&empty, Locale::En).to_string(),
///     "| Task | Owner | Due | Priority |\n|---|---|---|---|\n"
/// );
/// ```
pub struct ActionTableView<'a> {
    table: &'a ActionTable,
    locale: Locale,
}

impl<'a> ActionTableView<'a> {
    pub fn new(table: &'a ActionTable, locale: Locale) -> Self {
        Self { table, locale }
    }

    /// Column headers for the locale.
    pub fn columns(locale: Locale) -> [&'static str; 4] {
        match locale {
            Locale::En => ["Task", "Owner", "Due", "Priority"],
            Locale::Ko => ["업무", "담당", "기한", "우선순위"],
        }
    }
}

impl fmt::Display for ActionTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| {} |", Self::columns(self.locale).join(" | "))?;
        writeln!(f, "|---|---|---|---|")?;
        for item in self.table {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                item.task,
                item.owner,
                item.due_date,
                item.priority.label(self.locale)
            )?;
        }
        Ok(())
    }
}
