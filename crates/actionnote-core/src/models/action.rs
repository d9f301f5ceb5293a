//! Action item model and the ordered action table.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A single follow-up task coming out of a meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    /// What has to be done
    pub task: String,

    /// Who is responsible
    pub owner: String,

    /// Calendar date the task is due (naive, local)
    pub due_date: Date,

    /// Relative importance
    pub priority: Priority,
}

/// Ordered sequence of action items, presented top to bottom.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ActionTable(Vec<ActionItem>);

impl ActionTable {
    pub fn new(items: Vec<ActionItem>) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionItem> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ActionItem> {
        self.0.get(index)
    }

    /// Earliest due date in the table, if any.
    pub fn earliest_due(&self) -> Option<Date> {
        self.0.iter().map(|item| item.due_date).min()
    }
}

impl<'a> IntoIterator for &'a ActionTable {
    type Item = &'a ActionItem;
    type IntoIter = std::slice::Iter<'a, ActionItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for ActionTable {
    type Output = ActionItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
