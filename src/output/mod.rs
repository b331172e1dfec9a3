//! Output artifact writing
//!
//! Computes the dated destination under the parent of the raw directory and
//! persists the markdown and HTML projections of the report. Directory
//! creation is idempotent; any write failure aborts the run.

use crate::error::ReportError;
use crate::week::ReportWeek;
use std::path::{Path, PathBuf};

/// Resolved destination paths for one run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// `{parent}/{YYYYMMDD}_WeeklyReport`
    pub directory: PathBuf,
    pub markdown: PathBuf,
    pub html: PathBuf,
}

/// Compute the destination paths for a report. YYYYMMDD is the week's
/// Friday; the filename stem is the title with spaces replaced by
/// underscores.
pub fn artifact_paths(parent: &Path, title: &str, week: &ReportWeek) -> ArtifactPaths {
    let stamp = week.friday_stamp();
    let directory = parent.join(format!("{}_WeeklyReport", stamp));
    let stem = format!("{}_{}", title.replace(' ', "_"), stamp);

    ArtifactPaths {
        markdown: directory.join(format!("{}.md", stem)),
        html: directory.join(format!("{}.html", stem)),
        directory,
    }
}

/// Create the destination directory and write both artifacts.
pub fn write_artifacts(
    paths: &ArtifactPaths,
    markdown: &str,
    html: &str,
) -> Result<(), ReportError> {
    std::fs::create_dir_all(&paths.directory)
        .map_err(|e| ReportError::persistence(&paths.directory, e))?;

    std::fs::write(&paths.markdown, markdown)
        .map_err(|e| ReportError::persistence(&paths.markdown, e))?;
    std::fs::write(&paths.html, html).map_err(|e| ReportError::persistence(&paths.html, e))?;

    tracing::debug!("wrote artifacts under {:?}", paths.directory);
    Ok(())
}
