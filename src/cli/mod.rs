//! CLI interface using clap
//!
//! Provides the command-line interface for the weekly report generator

mod commands;

pub use commands::*;

use crate::gfm::Flavor;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Weekly report generator
#[derive(Parser, Debug)]
#[command(name = "weeklyreport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate this week's report from a raw directory
    Generate(GenerateArgs),

    /// Compile a single markdown file to HTML
    Compile(CompileArgs),
}

/// Arguments for generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the raw directory containing the tasks/ and others/
    /// subdirectories; template.html is expected one level up
    pub path: PathBuf,

    /// Weeks remaining in the current cycle, shown in the banner
    #[arg(long, default_value_t = 0)]
    pub weeks_left: u32,

    /// Markdown file with the per-team contribution table
    #[arg(long)]
    pub team_table: Option<PathBuf>,

    /// Markdown file with the per-member contribution table
    #[arg(long)]
    pub member_table: Option<PathBuf>,

    /// Authorization token for the rendering endpoint
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Arguments for compile command
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Input markdown file
    pub markdown: PathBuf,

    /// Output HTML file (defaults to the input name with an .html extension)
    #[arg(short = 'o', long)]
    pub html: Option<PathBuf>,

    /// Markdown flavor
    #[arg(short = 'f', long, value_enum, default_value_t = Flavor::Markdown)]
    pub flavor: Flavor,

    /// Authorization token for the rendering endpoint
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
