//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running with no arguments
//! prints the full report.

use clap::Parser;
use std::path::PathBuf;

/// Report local Node/npm versions and installed Backpack packages.
#[derive(Debug, Parser)]
#[command(name = "bpk-envinfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to run npm in (overrides current directory)
    #[arg(short, long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub info: InfoArgs,
}

/// Arguments for the report itself.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Package-manager command to run
    #[arg(long, env = "BPK_ENVINFO_NPM", value_name = "CMD")]
    pub npm: Option<String>,

    /// Runtime command to run
    #[arg(long, env = "BPK_ENVINFO_NODE", value_name = "CMD")]
    pub node: Option<String>,

    /// Don't run `npm outdated`; show installed versions only
    #[arg(long)]
    pub skip_outdated: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
