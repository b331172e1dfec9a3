//! Input file collection
//!
//! Enumerates the markdown files that make up one report: the `tasks`
//! category first, then `others`, with a byte-order filename sort inside
//! each category. That order is authoritative for everything downstream.

use crate::config::ReportConfig;
use crate::error::ReportError;
use std::path::{Path, PathBuf};

/// One of the two fixed input groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tasks,
    Others,
}

impl Category {
    /// Collection order: tasks before others.
    pub const ALL: [Category; 2] = [Category::Tasks, Category::Others];

    /// Stable key used as the anchor-id prefix. Renaming the input
    /// directories in the config does not change document anchors.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Tasks => "tasks",
            Category::Others => "others",
        }
    }

    /// Directory name for this category under the raw directory.
    pub fn dir_name<'a>(&self, config: &'a ReportConfig) -> &'a str {
        match self {
            Category::Tasks => &config.tasks_dir,
            Category::Others => &config.others_dir,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single input file, located during collection and consumed once by the
/// extractor.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub category: Category,
    pub file_name: String,
    pub path: PathBuf,
}

/// List both category subdirectories of `root`, non-recursively.
///
/// A missing or unreadable category directory is fatal: the report is
/// meaningless without both categories. An empty directory is fine and
/// contributes zero entries.
pub fn collect_files(root: &Path, config: &ReportConfig) -> Result<Vec<FileEntry>, ReportError> {
    let mut entries = Vec::new();

    for category in Category::ALL {
        let dir = root.join(category.dir_name(config));
        let mut names = Vec::new();

        let read_dir = std::fs::read_dir(&dir)
            .map_err(|e| ReportError::filesystem(&dir, e))?;

        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| ReportError::filesystem(&dir, e))?;
            let file_type = dir_entry
                .file_type()
                .map_err(|e| ReportError::filesystem(dir_entry.path(), e))?;
            if file_type.is_file() {
                let file_name = dir_entry.file_name();
                let Some(name) = file_name.to_str() else {
                    // A lossy conversion would point every later read at a
                    // path that never existed
                    return Err(ReportError::filesystem(
                        dir_entry.path(),
                        std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            "file name is not valid UTF-8",
                        ),
                    ));
                };
                names.push(name.to_string());
            }
        }

        names.sort();
        tracing::debug!("collected {} file(s) from {:?}", names.len(), dir);

        entries.extend(names.into_iter().map(|file_name| FileEntry {
            category,
            path: dir.join(&file_name),
            file_name,
        }));
    }

    Ok(entries)
}
