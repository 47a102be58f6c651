//! Command-line argument definitions for the Landscape CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control domain selection, output and
//! configuration paths, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Landscape tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Domain to assemble; repeat for several. Defaults to every known domain
    #[arg(short, long = "domain", value_name = "NAME")]
    pub domains: Vec<String>,

    /// Path to the output JSON file
    #[arg(short, long, default_value = "workspace.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the names of the known domains and exit
    #[arg(long)]
    pub list_domains: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
