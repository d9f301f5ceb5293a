//! MCP tool handlers implementation

use std::sync::Arc;

use actionnote_core::{
    display::{BundleView, OperationStatus},
    params as core, Session,
};
use jiff::Zoned;
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types are wrapped in a transparent serde container that adds
// the MCP-specific derives, so the core crate only needs the optional
// `schema` feature and no rmcp dependency.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type GenerateArtifacts = McpParams<core::GenerateArtifacts>;
pub type BuildEvent = McpParams<core::BuildEvent>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn generate_artifacts(
        &self,
        Parameters(params): Parameters<GenerateArtifacts>,
    ) -> McpResult {
        debug!(
            "generate_artifacts: {} chars, deadline {} days",
            params.as_ref().text.chars().count(),
            params.as_ref().deadline_days
        );

        let mut session = self.session.lock().await;
        let locale = session.locale();
        let bundle = session
            .generate(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to generate documents", &e))?;

        let json = bundle
            .to_json_pretty()
            .map_err(|e| to_mcp_error("Failed to encode documents", &e))?;
        Ok(CallToolResult::success(vec![
            Content::text(BundleView::new(bundle, locale).to_string()),
            Content::text(json),
        ]))
    }

    pub async fn build_calendar_event(
        &self,
        Parameters(params): Parameters<BuildEvent>,
    ) -> McpResult {
        debug!("build_calendar_event: {:?}", params);

        let mut session = self.session.lock().await;
        let event = session
            .build_event(params.as_ref(), Zoned::now().date())
            .map_err(|e| to_mcp_error("Failed to build calendar event", &e))?;

        let status = OperationStatus::success("Calendar event created")
            .with_detail(format!("UID: {}", event.uid))
            .with_detail(format!("Title: {}", event.summary));
        Ok(CallToolResult::success(vec![
            Content::text(status.to_string()),
            Content::text(event.to_ics()),
        ]))
    }

    pub async fn show_last_artifacts(&self) -> McpResult {
        debug!("show_last_artifacts");

        let session = self.session.lock().await;
        let mut contents = Vec::new();
        if let Some(bundle) = session.last_bundle() {
            contents.push(Content::text(
                BundleView::new(bundle, session.locale()).to_string(),
            ));
        }
        if let Some(event) = session.last_event() {
            contents.push(Content::text(event.to_ics()));
        }
        if contents.is_empty() {
            contents.push(Content::text(
                OperationStatus::failure(
                    "Nothing generated yet. Call 'generate_artifacts' or 'build_calendar_event' first.",
                )
                .to_string(),
            ));
        }
        Ok(CallToolResult::success(contents))
    }
}
