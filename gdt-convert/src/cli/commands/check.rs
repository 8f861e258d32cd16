//! Check command: validate a bundle and print the completeness report

use std::path::Path;

use anyhow::{Result, bail};
use gdt_convert_core::config::Config;
use gdt_convert_core::{ConvertOptions, bundle, convert, report};

use crate::cli::app::CheckArgs;

/// Execute the check command
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    if !args.folder.exists() {
        bail!("GDT folder not found: {}", args.folder.display());
    }
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::discover(&args.folder)?,
    };

    let loaded = bundle::load(&args.folder)?;
    let (_, run_report) = convert(&loaded, &ConvertOptions::default());

    println!("{}", report::generate(&run_report));

    let tally = run_report.tally();
    if (args.strict || config.strict) && tally.incomplete > 0 {
        bail!("strict mode: {} incomplete components", tally.incomplete);
    }
    Ok(())
}
