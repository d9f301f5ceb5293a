use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::{EventArgs, GenerateArgs};

/// Main command-line interface for the ActionNote meeting assistant
///
/// ActionNote turns meeting notes into a summary, a list of decisions, an
/// action table and an email draft, and builds calendar (.ics) files for
/// follow-up slots. It can also run as an MCP (Model Context Protocol) server
/// for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "actionnote")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Language of generated documents and calendar descriptions
    #[arg(long, global = true, value_enum, default_value_t = LocaleArg::En)]
    pub locale: LocaleArg,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the ActionNote CLI
///
/// - `generate`: Produce summary, decisions, action table and email draft
/// - `event`: Build a calendar event (.ics) for a time slot
/// - `slots`: List the recommended time slots
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Generate meeting documents from notes
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Build a calendar event file
    #[command(alias = "e")]
    Event(EventArgs),
    /// List recommended time slots
    Slots,
    /// Start the MCP server
    Serve,
}

/// Command-line representation of output locales
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// English
    En,
    /// Korean
    Ko,
}

impl From<LocaleArg> for actionnote_core::Locale {
    fn from(val: LocaleArg) -> Self {
        match val {
            LocaleArg::En => actionnote_core::Locale::En,
            LocaleArg::Ko => actionnote_core::Locale::Ko,
        }
    }
}
