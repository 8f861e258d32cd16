use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gdt-convert",
    version,
    about = "GDT Output - Website Converter",
    long_about = "Converts a brand's Growth Diagnosis Tool output bundle into the TypeScript data module consumed by the website, with a completeness report describing what was extracted or derived."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a bundle into a TypeScript data module
    #[command(about = "Convert a GDT output folder into a TypeScript data module")]
    Convert(ConvertArgs),

    /// Check a bundle's completeness without writing output
    #[command(about = "Validate a GDT output folder and print the completeness report")]
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Path to the GDT output folder
    pub folder: PathBuf,

    /// Brand accent color (hex)
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Output TypeScript file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export variable name
    #[arg(long)]
    pub var_name: Option<String>,

    /// Write the markdown validation report beside the output
    #[arg(long)]
    pub report: bool,

    /// Fail if any component remains incomplete after derivation
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the GDT output folder
    pub folder: PathBuf,

    /// Fail if any component remains incomplete after derivation
    #[arg(long)]
    pub strict: bool,
}
