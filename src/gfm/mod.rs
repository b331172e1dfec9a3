//! Remote markdown-to-HTML rendering
//!
//! The pipeline never parses markdown itself; it sends the composed source
//! to a rendering endpoint (the GitHub markdown API by default) and uses the
//! returned HTML verbatim, apart from stripping the vendor anchor-id prefix.

mod client;

pub use client::{GfmClient, GfmConfig, MockRenderer};

use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// Markdown dialect selector sent to the rendering endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Plain markdown rendering
    Markdown,
    /// GitHub-flavored markdown
    Gfm,
}

impl Flavor {
    /// Wire value for the `mode` field of the render request.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Markdown => "markdown",
            Flavor::Gfm => "gfm",
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can turn markdown into HTML. The one seam in the pipeline:
/// production uses `GfmClient`, tests use `MockRenderer`.
pub trait HtmlRenderer {
    fn render(&self, markdown: &str, flavor: Flavor) -> Result<String, ReportError>;
}

/// Anchor-id prefix the GitHub renderer adds to every heading anchor.
const VENDOR_ID_PREFIX: &str = "user-content-";

/// Strip the vendor anchor-id prefix so TOC links resolve against the ids
/// the extractor embedded.
pub fn beautify(html: &str) -> String {
    html.replace(VENDOR_ID_PREFIX, "")
}

/// Stylesheet link prepended to standalone compiled HTML files.
pub const STYLESHEET_LINK: &str = "<link rel=\"stylesheet\" type=\"text/css\" \
     href=\"https://cdn.jsdelivr.net/npm/github-markdown-css@5/github-markdown.min.css\" \
     media=\"screen\" />\n";
