//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// An optional list of details is rendered as bullets under the message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub details: Vec<String>,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            details: Vec::new(),
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            details: Vec::new(),
        }
    }

    /// Append a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )?;
        for detail in &self.details {
            writeln!(f, "- {detail}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Calendar event created");
        assert_eq!(success.to_string(), "Success: Calendar event created\n");

        let failure = OperationStatus::failure("Invalid time range");
        assert!(failure.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_operation_status_details() {
        let status = OperationStatus::success("Wrote calendar file")
            .with_detail("Path: actionnote_action.ics")
            .with_detail("UID: 1.000000.0@actionnote");
        assert_eq!(
            status.to_string(),
            "Success: Wrote calendar file\n- Path: actionnote_action.ics\n- UID: 1.000000.0@actionnote\n"
        );
    }
}
