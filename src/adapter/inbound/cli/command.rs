//! Command-line interface definitions.
//!
//! Defines the CLI structure for the betxtract binary using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Extract and compare bookmaker odds from saved pages
#[derive(Parser, Debug)]
#[command(name = "betxtract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract odds from saved pages and print the merged matches as JSON
    Extract(ExtractArgs),

    /// List supported sites
    Sites(SitesArgs),
}

/// Arguments for `betxtract extract`.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Page to extract, as `<host-or-url>=<file.html>`; repeatable
    #[arg(short, long = "page", value_name = "HOST=FILE", value_parser = parse_page, required = true)]
    pub pages: Vec<PageArg>,

    /// Saved content of the exchange's embedded frame
    #[arg(long, value_name = "FILE")]
    pub frame: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `betxtract sites`.
#[derive(Args, Debug)]
pub struct SitesArgs {
    /// Print the site table as JSON
    #[arg(long)]
    pub json: bool,
}

/// A page given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArg {
    pub url: String,
    pub path: PathBuf,
}

fn parse_page(value: &str) -> Result<PageArg, String> {
    let (url, path) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected HOST=FILE, got '{value}'"))?;
    if url.trim().is_empty() || path.trim().is_empty() {
        return Err(format!("expected HOST=FILE, got '{value}'"));
    }
    Ok(PageArg {
        url: url.trim().to_string(),
        path: PathBuf::from(path.trim()),
    })
}
