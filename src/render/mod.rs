//! Variable substitution for markdown and HTML templates
//!
//! A deliberately small template dialect: `{{ name }}` placeholders, nothing
//! else. Unknown placeholders are left verbatim so stray braces in report
//! prose survive rendering.

use crate::error::ReportError;
use std::path::Path;

/// Replace every `{{ name }}` placeholder with its value. Placeholder names
/// may carry inner padding; anything not matching a known variable is kept
/// as-is.
pub fn substitute(source: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let Some(end) = rest[start + 2..].find("}}") else {
            break;
        };
        let name = rest[start + 2..start + 2 + end].trim();

        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
            }
            None => out.push_str(&rest[..start + 2 + end + 2]),
        }
        rest = &rest[start + 2 + end + 2..];
    }

    out.push_str(rest);
    out
}

/// Substitute the contribution tables into the report markdown.
pub fn render_tables(markdown: &str, team_table: &str, member_table: &str) -> String {
    substitute(
        markdown,
        &[("team_table", team_table), ("member_table", member_table)],
    )
}

/// Substitute title and rendered body into the HTML shell template.
pub fn render_page(template: &str, title: &str, body: &str) -> String {
    substitute(template, &[("title", title), ("body", body)])
}

/// Read the HTML shell template from disk.
pub fn load_template(path: &Path) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|e| ReportError::filesystem(path, e))
}
