//! WeeklyReport - weekly status report generator
//!
//! This library aggregates per-task markdown files into one weekly status
//! report, renders it to HTML through a remote markdown rendering service,
//! and writes dated markdown and HTML artifacts.

pub mod cli;
pub mod collect;
pub mod compose;
pub mod config;
pub mod error;
pub mod extract;
pub mod gfm;
pub mod output;
pub mod render;
pub mod week;

/// Re-export commonly used types
pub use collect::{Category, FileEntry};
pub use compose::{Report, TocEntry};
pub use config::ReportConfig;
pub use error::ReportError;
pub use extract::Section;
pub use gfm::{Flavor, HtmlRenderer};
pub use week::ReportWeek;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "weeklyreport";
