//! Section extraction and anchor rewriting
//!
//! Each input file becomes one `Section`. The first line of the file is its
//! heading: an anchor tag is spliced into it for the table of contents to
//! link against, and a back-to-top link is appended.
//!
//! Input:  `## Task 01 - Setup environment`
//! Output: `## <a id="tasks-01-setup"></a> Task 01 - Setup environment [^](#toc)`

use crate::collect::FileEntry;
use crate::error::ReportError;

/// Back-to-top link appended to every rewritten heading line. Targets the
/// `toc` anchor carried by the table-of-contents heading.
pub const BACKLINK: &str = "[^](#toc)";

/// One report section, in collection order.
#[derive(Debug, Clone)]
pub struct Section {
    /// Unique in-document anchor, `category-slug(file stem)`
    pub anchor_id: String,
    /// Heading text with the leading marker token stripped
    pub heading: String,
    /// Rewritten heading line plus the remaining file content
    pub body: String,
}

/// Read a collected file and turn it into a `Section`.
///
/// Unreadable or non-UTF-8 input is fatal for the whole run; a report with
/// missing sections is worse than no report.
pub fn extract_section(entry: &FileEntry) -> Result<Section, ReportError> {
    let content = std::fs::read_to_string(&entry.path)
        .map_err(|e| ReportError::filesystem(&entry.path, e))?;

    let (first_line, rest) = match content.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (content.as_str(), ""),
    };
    let raw_heading = first_line.trim_end_matches('\r');

    let anchor_id = format!("{}-{}", entry.category.key(), slug(file_stem(&entry.file_name)));
    let heading = heading_text(raw_heading);
    let heading_line = rewrite_heading(raw_heading, &anchor_id);

    Ok(Section {
        anchor_id,
        heading,
        body: format!("{}\n{}", heading_line, rest),
    })
}

/// Heading text: the trimmed first line minus its first whitespace-delimited
/// token. The token is usually a markdown marker like `##`, but the split is
/// marker-agnostic. A line with no whitespace is kept whole.
fn heading_text(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim_start().to_string(),
        None => trimmed.to_string(),
    }
}

/// Splice the anchor tag into the heading line and append the back-to-top
/// link. The anchor replaces the first space of the trimmed line; a line
/// without any space gets the anchor prepended instead.
fn rewrite_heading(raw: &str, anchor_id: &str) -> String {
    let trimmed = raw.trim();
    let anchor = format!(" <a id=\"{}\"></a> ", anchor_id);

    if trimmed.contains(' ') {
        format!("{} {}", trimmed.replacen(' ', &anchor, 1), BACKLINK)
    } else {
        format!("<a id=\"{}\"></a> {} {}", anchor_id, trimmed, BACKLINK)
    }
}

/// Replace every whitespace run with a single hyphen.
pub fn slug(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join("-")
}

/// File name without its last extension segment.
fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
