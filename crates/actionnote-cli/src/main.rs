//! ActionNote CLI Application
//!
//! Command-line interface for turning meeting notes into documents and
//! calendar events, plus an MCP server mode.

mod args;
mod cli;
mod mcp;
mod renderer;

use actionnote_core::{Locale, Session};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, ActionNoteMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        locale,
        command,
    } = Args::parse();
    let locale = Locale::from(locale);
    let renderer = TerminalRenderer::new(!no_color);

    info!("ActionNote started (locale: {locale})");

    match command {
        Generate(args) => Cli::new(locale, renderer).generate(args),
        Event(args) => Cli::new(locale, renderer).event(args),
        Slots => Cli::new(locale, renderer).slots(),
        Serve => {
            info!("Starting ActionNote MCP server");
            run_stdio_server(ActionNoteMcpServer::new(Session::new(locale)))
                .await
                .context("MCP server failed")
        }
    }
}
