//! Display formatting for bundles, tables and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly where the output
//! does not depend on context. Everything that needs a locale or a specific
//! wire format goes through a small wrapper type instead:
//!
//! - [`ActionTableView`]: markdown table of action items
//! - [`BundleView`]: full markdown report of an [`ArtifactBundle`](crate::models::ArtifactBundle)
//! - [`IcsDateTime`] / [`IcsTimestamp`]: iCalendar date-time forms
//! - [`OperationStatus`]: success/failure lines for the CLI and MCP server
//!
//! All wrappers hold references and produce markdown, so the same output can
//! be rendered in a terminal or returned verbatim from an MCP tool.
//!
//! ```rust
//! use actionnote_core::{
//!     display::BundleView, models::Locale, params::GenerationParams, ArtifactGenerator,
//! };
//! use jiff::civil::date;
//!
//! let bundle = ArtifactGenerator::new().generate_on("notes", &GenerationParams::default(), date(2024, 1, 1));
//! let report = BundleView::new(&bundle, Locale::En).to_string();
//! assert!(report.contains("### Action Table"));
//! assert!(report.contains("| Wireframe production | Designer Kim | 2024-01-08 | High |"));
//! ```

pub mod datetime;
pub mod models;
pub mod status;
pub mod table;


pub use datetime::{IcsDateTime, IcsTimestamp};
pub use models::BundleView;
pub use status::OperationStatus;
pub use table::ActionTableView;
