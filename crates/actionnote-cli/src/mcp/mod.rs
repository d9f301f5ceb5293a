//! MCP server implementation for ActionNote
//!
//! Exposes document generation and calendar event creation as Model Context
//! Protocol tools. Each server instance owns one [`Session`], so results from
//! one connected client never leak into another.

use std::sync::Arc;

use actionnote_core::Session;
use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{BuildEvent, GenerateArtifacts, McpResult};

/// MCP server for ActionNote
#[derive(Clone)]
pub struct ActionNoteMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ActionNoteMcpServer {
    /// Create a new server owning the given session
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "generate_artifacts",
        description = "Turn meeting notes into a summary, a decision list, an action item table and an email draft. Provide the notes as 'text' (blank text yields a 'no input provided' result). Optional 'duration_minutes' is one of 30, 60 or 90 (default 60). Optional 'deadline_days' between 1 and 21 (default 7) sets the action item due dates. Returns a markdown report and the same documents as JSON."
    )]
    async fn generate_artifacts(&self, params: Parameters<GenerateArtifacts>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.generate_artifacts(params).await
    }

    #[tool(
        name = "build_calendar_event",
        description = "Build a single-event iCalendar (.ics) document. 'time_range' is required in the form HH:MM-HH:MM (24-hour, end after start). Optional 'date' is YYYY-MM-DD (default today) and optional 'title' names the event. Returns a status line and the calendar document text."
    )]
    async fn build_calendar_event(&self, params: Parameters<BuildEvent>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.build_calendar_event(params).await
    }

    #[tool(
        name = "show_last_artifacts",
        description = "Show the most recent documents and calendar event produced in this session. A failed call never replaces earlier results."
    )]
    async fn show_last_artifacts(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.show_last_artifacts().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ActionNoteMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "actionnote".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"ActionNote turns meeting notes into follow-up documents and schedules the follow-up work.

## Workflow
1. Call `generate_artifacts` with the meeting notes to get a summary, decisions, an action item table and an email draft
2. Pick a slot such as 09:00-09:30, 10:00-11:00 or 14:00-15:00 and call `build_calendar_event` to get an .ics document
3. Use `show_last_artifacts` to retrieve the latest results again

## Notes
- Dates are naive local dates in YYYY-MM-DD form
- Time ranges must be HH:MM-HH:MM with the end after the start"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ActionNoteMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting ActionNote MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
