//! Command-line argument wrappers and command handlers
//!
//! Each command's arguments live in a clap `Args` struct that converts into
//! the matching core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```
//!
//! Core parameter types stay free of clap derives, and all range checks
//! (deadline days, duration presets, time formats) happen in the core so the
//! CLI and the MCP server reject the same inputs.

use std::path::{Path, PathBuf};

use actionnote_core::{
    display::{BundleView, OperationStatus},
    params::{BuildEvent, GenerateArtifacts, DEFAULT_DEADLINE_DAYS, RECOMMENDED_SLOTS},
    ArtifactGenerator, CalendarEventBuilder, InputSource, Locale, RangePolicy, Session,
};
use anyhow::{Context, Result};
use clap::Args;
use jiff::Zoned;
use log::info;

use crate::renderer::TerminalRenderer;

/// Default file name for generated calendar events.
pub const DEFAULT_ICS_FILE: &str = "actionnote_action.ics";

/// Generate meeting documents from notes
///
/// Notes are read from --text, --file, --sample, or standard input when no
/// source is given. Blank notes produce an explicit "no input" result rather
/// than an error.
#[derive(Args)]
pub struct GenerateArgs {
    /// Meeting notes passed inline
    #[arg(short, long, conflicts_with_all = ["file", "sample"])]
    pub text: Option<String>,
    /// File containing the notes (.txt, .md, .docx, .pdf)
    #[arg(short, long, conflicts_with = "sample")]
    pub file: Option<PathBuf>,
    /// Use the built-in demo notes (OCR stand-in)
    #[arg(long)]
    pub sample: bool,
    /// Expected effort per action item in minutes (30, 60 or 90)
    #[arg(short, long, default_value_t = 60)]
    pub duration: u32,
    /// Default deadline in days from today (1-21)
    #[arg(long, default_value_t = DEFAULT_DEADLINE_DAYS, allow_negative_numbers = true)]
    pub deadline_days: i64,
    /// Print the bundle as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Where the notes should be read from.
    pub fn source(&self) -> InputSource {
        if let Some(text) = &self.text {
            InputSource::Text(text.clone())
        } else if let Some(path) = &self.file {
            InputSource::File(path.clone())
        } else if self.sample {
            InputSource::Sample
        } else {
            InputSource::Stdin
        }
    }

    /// Convert into core parameters once the notes have been read.
    pub fn into_params(self, text: String) -> GenerateArtifacts {
        GenerateArtifacts {
            text,
            duration_minutes: self.duration,
            deadline_days: self.deadline_days,
        }
    }
}

/// Build a calendar event file
///
/// Combines a date and an HH:MM-HH:MM slot into a single-event .ics
/// document. Slots whose end is not after the start are rejected unless
/// --allow-inverted is given.
#[derive(Args)]
pub struct EventArgs {
    /// Event date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Time slot as HH:MM-HH:MM
    #[arg(short, long, default_value = RECOMMENDED_SLOTS[0])]
    pub slot: String,
    /// Event title (defaults to the locale's standard title)
    #[arg(short, long)]
    pub title: Option<String>,
    /// Emit events whose end is not after their start instead of failing
    #[arg(long)]
    pub allow_inverted: bool,
    /// Where to write the .ics file
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print the .ics document to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,
}

impl From<&EventArgs> for BuildEvent {
    fn from(val: &EventArgs) -> Self {
        BuildEvent {
            date: val.date.clone(),
            time_range: val.slot.clone(),
            title: val.title.clone(),
        }
    }
}

impl EventArgs {
    fn range_policy(&self) -> RangePolicy {
        if self.allow_inverted {
            RangePolicy::PassThrough
        } else {
            RangePolicy::Reject
        }
    }
}

/// Handler for CLI commands
pub struct Cli {
    locale: Locale,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(locale: Locale, renderer: TerminalRenderer) -> Self {
        Self { locale, renderer }
    }

    fn session(&self, policy: RangePolicy) -> Session {
        Session::with_components(
            ArtifactGenerator::new().with_locale(self.locale),
            CalendarEventBuilder::for_locale(self.locale).with_range_policy(policy),
        )
    }

    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let source = args.source();
        let text = source
            .read()
            .with_context(|| format!("Failed to read notes from {source:?}"))?;
        let json = args.json;
        let request = args.into_params(text);

        let mut session = self.session(RangePolicy::default());
        let bundle = session
            .generate(&request)
            .context("Failed to generate documents")?;
        info!("Generated {} action items", bundle.actions.len());

        if json {
            println!("{}", bundle.to_json_pretty()?);
            return Ok(());
        }
        self.renderer
            .render(&BundleView::new(bundle, self.locale).to_string())
    }

    pub fn event(&self, args: EventArgs) -> Result<()> {
        let request = BuildEvent::from(&args);
        let mut session = self.session(args.range_policy());
        let event = session
            .build_event(&request, Zoned::now().date())
            .context("Failed to build calendar event")?;
        let ics = event.to_ics();

        if args.stdout {
            print!("{ics}");
            return Ok(());
        }

        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICS_FILE));
        write_ics(&path, &ics)?;

        let status = OperationStatus::success("Calendar event created")
            .with_detail(format!("File: {}", path.display()))
            .with_detail(format!(
                "Start: {}",
                event.start.strftime("%Y-%m-%d %H:%M")
            ))
            .with_detail(format!("End: {}", event.end.strftime("%Y-%m-%d %H:%M")))
            .with_detail(format!("UID: {}", event.uid));
        self.renderer.render(&status.to_string())
    }

    pub fn slots(&self) -> Result<()> {
        let mut out = String::from("# Recommended Slots\n\n");
        for slot in RECOMMENDED_SLOTS {
            out.push_str(&format!("- {slot}\n"));
        }
        self.renderer.render(&out)
    }
}

fn write_ics(path: &Path, ics: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, ics).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote calendar event to {}", path.display());
    Ok(())
}
