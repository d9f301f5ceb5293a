//! The four-part artifact bundle produced from a set of meeting notes.

use serde::{Deserialize, Serialize};

use super::ActionTable;
use crate::error::Result;

/// Summary, decisions, action table and email draft generated together.
///
/// The email draft embeds the other three parts as they were at generation
/// time, so a bundle is never edited piecemeal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactBundle {
    /// Markdown summary section
    pub summary: String,

    /// Markdown list of decisions
    pub decisions: String,

    /// Ordered action items
    pub actions: ActionTable,

    /// Ready-to-send email body in markdown
    pub email_draft: String,
}

impl ArtifactBundle {
    /// True when the bundle was produced from blank input.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Serialize the bundle as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
