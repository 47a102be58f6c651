//! CLI logic for the Landscape tool.
//!
//! This module contains the core CLI logic: load configuration, assemble
//! the selected domains and write the JSON hand-off document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use landscape::{LandscapeBuilder, LandscapeError, domains};

/// Run the Landscape CLI application
///
/// # Errors
///
/// Returns `LandscapeError` for:
/// - Configuration loading errors, including unknown or repeated domain names
/// - Definition errors raised while assembling the model
/// - Export and file I/O errors
pub fn run(args: &Args) -> Result<(), LandscapeError> {
    if args.list_domains {
        for name in domains::DOMAIN_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    info!(
        domains:? = args.domains,
        output_path = args.output;
        "Assembling workspace"
    );

    let app_config = config::load_config(args)?;

    let builder = LandscapeBuilder::new(app_config);
    let workspace = builder.build()?;
    let json = builder.export_json(&workspace)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Workspace exported successfully");

    Ok(())
}
