//! Report configuration
//!
//! Everything that used to be a hard-coded magic string lives here: category
//! directory names, report title, banner template, template filename, and
//! rendering endpoint. A `report.toml` next to `template.html` overrides the
//! defaults.

use crate::gfm::Flavor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file, looked up in the parent of the
/// raw directory.
pub const CONFIG_FILE: &str = "report.toml";

/// Configuration for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title, used as the top heading and in output filenames
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory name for task write-ups
    #[serde(default = "default_tasks_dir")]
    pub tasks_dir: String,

    /// Directory name for everything that is not a task
    #[serde(default = "default_others_dir")]
    pub others_dir: String,

    /// HTML shell template filename, resolved against the parent of the
    /// raw directory
    #[serde(default = "default_template_file")]
    pub template_file: String,

    /// Banner template; `monday`, `friday`, `weeks` and `url` variables are
    /// substituted at composition time
    #[serde(default = "default_banner_template")]
    pub banner_template: String,

    /// Reference URL linked from the banner
    #[serde(default = "default_schedule_url")]
    pub schedule_url: String,

    /// Markdown rendering endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Markdown dialect sent to the rendering endpoint
    #[serde(default = "default_flavor")]
    pub flavor: Flavor,

    /// Request timeout for the rendering endpoint, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_title() -> String {
    "Team weekly report".to_string()
}

fn default_tasks_dir() -> String {
    "tasks".to_string()
}

fn default_others_dir() -> String {
    "others".to_string()
}

fn default_template_file() -> String {
    "template.html".to_string()
}

fn default_banner_template() -> String {
    "*Week of {{ monday }} - {{ friday }}, {{ weeks }} week(s) remaining in the cycle \
     ([schedule]({{ url }}))*"
        .to_string()
}

fn default_schedule_url() -> String {
    "https://example.org/release-schedule".to_string()
}

fn default_endpoint() -> String {
    "https://api.github.com/markdown".to_string()
}

fn default_flavor() -> Flavor {
    Flavor::Gfm
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tasks_dir: default_tasks_dir(),
            others_dir: default_others_dir(),
            template_file: default_template_file(),
            banner_template: default_banner_template(),
            schedule_url: default_schedule_url(),
            endpoint: default_endpoint(),
            flavor: default_flavor(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from `report.toml` in the given directory, or
    /// return defaults if the file does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: ReportConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.tasks_dir, "tasks");
        assert_eq!(config.others_dir, "others");
        assert_eq!(config.flavor, Flavor::Gfm);
        assert!(config.endpoint.starts_with("https://"));
        assert!(config.timeout_secs > 0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ReportConfig = toml::from_str(r#"title = "Infra weekly""#).unwrap();
        assert_eq!(config.title, "Infra weekly");
        assert_eq!(config.template_file, "template.html");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.title, default_title());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "title = \"Storage weekly\"\nflavor = \"markdown\"\n",
        )
        .unwrap();

        let config = ReportConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.title, "Storage weekly");
        assert_eq!(config.flavor, Flavor::Markdown);
    }
}
