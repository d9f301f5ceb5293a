//! Error handling utilities for MCP server

use actionnote_core::ActionNoteError;
use rmcp::ErrorData;

/// Convert core errors to MCP errors.
///
/// Problems with the caller's arguments become `invalid_params` so clients
/// can correct and retry; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &ActionNoteError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
