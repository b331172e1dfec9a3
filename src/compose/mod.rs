//! Report composition
//!
//! Builds the final markdown document from the ordered section sequence:
//! title heading, week banner, table of contents, then the concatenated
//! section bodies. The TOC and the body are both derived from the same
//! section sequence, so their anchor order can never diverge.

use crate::config::ReportConfig;
use crate::extract::Section;
use crate::render;
use crate::week::ReportWeek;

/// Heading line of the table of contents. Carries the `toc` anchor that
/// every section's back-to-top link points at.
pub const TOC_HEADING: &str = "## <a id=\"toc\"></a> Table of Contents";

/// One numbered table-of-contents line.
#[derive(Debug, Clone)]
pub struct TocEntry {
    /// 1-based position, identical to the section's position
    pub order: usize,
    pub heading: String,
    pub anchor_id: String,
}

/// The fully composed report, kept in memory only; callers persist its
/// markdown and HTML projections.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub week_banner: String,
    pub toc: Vec<TocEntry>,
    pub sections: Vec<Section>,
}

impl Report {
    /// Compose a report from sections in collection order. The TOC is
    /// derived from the same sequence the body is built from.
    pub fn build(title: String, week_banner: String, sections: Vec<Section>) -> Self {
        let toc = sections
            .iter()
            .enumerate()
            .map(|(i, section)| TocEntry {
                order: i + 1,
                heading: section.heading.clone(),
                anchor_id: section.anchor_id.clone(),
            })
            .collect();

        Self {
            title,
            week_banner,
            toc,
            sections,
        }
    }

    /// Numbered TOC block linking to each section anchor.
    pub fn toc_markdown(&self) -> String {
        let mut parts = vec![TOC_HEADING.to_string()];
        parts.extend(
            self.toc
                .iter()
                .map(|e| format!("{}. [{}](#{})", e.order, e.heading, e.anchor_id)),
        );
        parts.join("\n\n")
    }

    /// Section bodies joined by a single blank line, collection order.
    pub fn body_markdown(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.body.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The full markdown source: title, banner, TOC, body.
    pub fn to_markdown(&self) -> String {
        let title_heading = format!("# {}", self.title);
        let toc = self.toc_markdown();
        let body = self.body_markdown();

        [
            title_heading.as_str(),
            self.week_banner.as_str(),
            toc.as_str(),
            body.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

/// Format the one-line week banner from the configured template.
pub fn banner(config: &ReportConfig, week: &ReportWeek, weeks_left: u32) -> String {
    let weeks = weeks_left.to_string();
    render::substitute(
        &config.banner_template,
        &[
            ("monday", &week.monday_display()),
            ("friday", &week.friday_display()),
            ("weeks", &weeks),
            ("url", &config.schedule_url),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn section(anchor_id: &str, heading: &str) -> Section {
        Section {
            anchor_id: anchor_id.to_string(),
            heading: heading.to_string(),
            body: format!("## <a id=\"{}\"></a> {} [^](#toc)\nbody", anchor_id, heading),
        }
    }

    #[test]
    fn test_toc_matches_section_order() {
        let report = Report::build(
            "Weekly".to_string(),
            String::new(),
            vec![
                section("tasks-01-a", "Task 01 - A"),
                section("others-notes", "Notes"),
            ],
        );

        assert_eq!(report.toc.len(), report.sections.len());
        for (entry, section) in report.toc.iter().zip(&report.sections) {
            assert_eq!(entry.anchor_id, section.anchor_id);
        }
        assert_eq!(report.toc[0].order, 1);
        assert_eq!(report.toc[1].order, 2);
    }

    #[test]
    fn test_toc_markdown_format() {
        let report = Report::build(
            "Weekly".to_string(),
            String::new(),
            vec![
                section("tasks-01-a", "Task 01 - A"),
                section("others-notes", "Notes"),
            ],
        );

        let toc = report.toc_markdown();
        assert!(toc.starts_with(TOC_HEADING));
        assert!(toc.contains("1. [Task 01 - A](#tasks-01-a)"));
        assert!(toc.contains("2. [Notes](#others-notes)"));
    }

    #[test]
    fn test_body_joined_by_blank_line() {
        let report = Report::build(
            "Weekly".to_string(),
            String::new(),
            vec![section("a", "A"), section("b", "B")],
        );
        assert!(report.body_markdown().contains("body\n\n## "));
    }

    #[test]
    fn test_empty_report_has_no_dangling_separators() {
        let report = Report::build("Weekly".to_string(), String::new(), vec![]);
        let markdown = report.to_markdown();
        assert!(markdown.starts_with("# Weekly"));
        assert!(!markdown.ends_with('\n'));
        assert!(!markdown.contains("\n\n\n"));
    }

    #[test]
    fn test_banner_substitution() {
        let config = ReportConfig {
            banner_template: "{{ monday }} to {{ friday }}: {{ weeks }} left, see {{ url }}"
                .to_string(),
            schedule_url: "https://example.org/cycle".to_string(),
            ..ReportConfig::default()
        };
        let week = ReportWeek::containing(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());

        let line = banner(&config, &week, 3);
        assert_eq!(line, "Aug 24 to Aug 28: 3 left, see https://example.org/cycle");
    }
}
