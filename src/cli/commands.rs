//! Command implementations

use super::{CompileArgs, GenerateArgs};
use crate::collect;
use crate::compose::{self, Report};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::extract;
use crate::gfm::{beautify, GfmClient, GfmConfig, HtmlRenderer, STYLESHEET_LINK};
use crate::output::{self, ArtifactPaths};
use crate::render;
use crate::week::ReportWeek;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pipeline options for one report run, kept separate from the clap types
/// so tests can drive the pipeline directly.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Weeks remaining in the cycle, shown in the banner
    pub weeks_left: u32,
    /// Markdown file with the per-team contribution table
    pub team_table: Option<PathBuf>,
    /// Markdown file with the per-member contribution table
    pub member_table: Option<PathBuf>,
}

/// Generate this week's report
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let parent = parent_dir(&args.path)?;
    let config = ReportConfig::load_or_default(parent)?;

    let renderer = GfmClient::new(GfmConfig {
        endpoint: config.endpoint.clone(),
        token: args.token.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
    })?;

    let opts = GenerateOptions {
        weeks_left: args.weeks_left,
        team_table: args.team_table.clone(),
        member_table: args.member_table.clone(),
    };

    let paths = run_pipeline(&args.path, &config, &opts, &renderer)?;

    println!("✓ Report written");
    println!("  Markdown: {:?}", paths.markdown);
    println!("  HTML: {:?}", paths.html);

    Ok(())
}

/// The whole report pipeline: collect, extract, compose, substitute, render,
/// write. All-or-nothing; the first failure aborts with no partial output.
pub fn run_pipeline(
    raw_dir: &Path,
    config: &ReportConfig,
    opts: &GenerateOptions,
    renderer: &dyn HtmlRenderer,
) -> Result<ArtifactPaths, ReportError> {
    let parent = parent_dir(raw_dir)?;

    let entries = collect::collect_files(raw_dir, config)?;
    tracing::info!("collected {} input file(s)", entries.len());

    let sections = entries
        .iter()
        .map(extract::extract_section)
        .collect::<Result<Vec<_>, _>>()?;

    let week = ReportWeek::current();
    let banner = compose::banner(config, &week, opts.weeks_left);
    let report = Report::build(config.title.clone(), banner, sections);

    let team_table = load_table(opts.team_table.as_deref())?;
    let member_table = load_table(opts.member_table.as_deref())?;
    let markdown = render::render_tables(&report.to_markdown(), &team_table, &member_table);

    let html_body = beautify(&renderer.render(&markdown, config.flavor)?);
    let template = render::load_template(&parent.join(&config.template_file))?;
    let page = render::render_page(&template, &config.title, &html_body);

    let paths = output::artifact_paths(parent, &config.title, &week);
    output::write_artifacts(&paths, &markdown, &page)?;

    Ok(paths)
}

/// Compile a single markdown file to a standalone HTML file
pub fn compile(args: &CompileArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.markdown)
        .map_err(|e| ReportError::filesystem(&args.markdown, e))?;

    let client = GfmClient::new(GfmConfig {
        token: args.token.clone(),
        ..GfmConfig::default()
    })?;
    let html = beautify(&client.render(&text, args.flavor)?);

    let out = args
        .html
        .clone()
        .unwrap_or_else(|| args.markdown.with_extension("html"));
    let page = format!("{}{}", STYLESHEET_LINK, html);
    std::fs::write(&out, page).map_err(|e| ReportError::persistence(&out, e))?;

    println!("✓ Compiled {:?} -> {:?}", args.markdown, out);

    Ok(())
}

/// Parent of the raw directory; template and artifacts live there.
fn parent_dir(raw_dir: &Path) -> Result<&Path, ReportError> {
    raw_dir.parent().ok_or_else(|| {
        ReportError::filesystem(
            raw_dir,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "raw directory has no parent",
            ),
        )
    })
}

/// Read a contribution table file, or produce an empty table when none was
/// supplied.
fn load_table(path: Option<&Path>) -> Result<String, ReportError> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| ReportError::filesystem(path, e))
        }
        None => Ok(String::new()),
    }
}
