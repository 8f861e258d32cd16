//! Convert command: bundle folder in, TypeScript data module out

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use gdt_convert_core::config::Config;
use gdt_convert_core::{ConvertOptions, bundle, convert, emit, report};
use tracing::info;

use crate::cli::app::ConvertArgs;

/// Execute the convert command
pub fn execute(args: ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    if !args.folder.exists() {
        bail!("GDT folder not found: {}", args.folder.display());
    }
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::discover(&args.folder)?,
    };

    println!("Converting: {}", args.folder.display());
    let loaded = bundle::load(&args.folder)?;
    let options =
        ConvertOptions { accent_color: args.accent_color.or(config.accent_color.clone()) };
    let (analysis, run_report) = convert(&loaded, &options);

    let tally = run_report.tally();
    if (args.strict || config.strict) && tally.incomplete > 0 {
        bail!(
            "strict mode: {} incomplete components (run `gdt-convert check` for details)",
            tally.incomplete
        );
    }

    let var_name =
        args.var_name.unwrap_or_else(|| emit::default_var_name(&analysis.brand.id));
    let generated_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let module = emit::to_typescript(&analysis, &var_name, &generated_at)?;

    let output_path = output_path(args.output, &config, &analysis.brand.id);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(&output_path, module)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!(output = %output_path.display(), "wrote TypeScript module");

    println!();
    println!("Converted successfully");
    println!("   Output: {}", output_path.display());
    println!("   Brand: {}", analysis.brand.name);
    println!("   Score: {}", analysis.total_score);
    println!(
        "   Components: {} complete, {} derived, {} incomplete",
        tally.complete, tally.derived, tally.incomplete
    );

    if args.report || config.report {
        let report_path = output_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{}-conversion-report.md", analysis.brand.id));
        fs::write(&report_path, report::generate(&run_report))
            .with_context(|| format!("failed to write {}", report_path.display()))?;
        println!("   Report: {}", report_path.display());
    }

    if !run_report.warnings.is_empty() {
        println!();
        println!("Warnings ({}):", run_report.warnings.len());
        for warning in run_report.warnings.iter().take(5) {
            println!("   - {}", warning);
        }
        if run_report.warnings.len() > 5 {
            println!("   ... and {} more (see report)", run_report.warnings.len() - 5);
        }
    }

    Ok(())
}

fn output_path(explicit: Option<PathBuf>, config: &Config, brand_id: &str) -> PathBuf {
    let filename = format!("{}.ts", brand_id);
    explicit
        .or_else(|| config.output_dir.as_ref().map(|dir| dir.join(&filename)))
        .unwrap_or_else(|| PathBuf::from("src/data").join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::app::ConvertArgs;

    fn args(folder: &Path, output: Option<PathBuf>, strict: bool) -> ConvertArgs {
        ConvertArgs {
            folder: folder.to_path_buf(),
            accent_color: None,
            output,
            var_name: None,
            report: true,
            strict,
        }
    }

    #[test]
    fn test_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(execute(args(&missing, None, false), None).is_err());
    }

    #[test]
    fn test_writes_module_and_report() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(bundle::SUMMARY_FILE),
            r#"{"brand_name": "Acme Seltzer", "total_score": 53.6, "analysis_date": "2026-03-01"}"#,
        )
        .unwrap();
        let output = dir.path().join("out").join("acme.ts");

        execute(args(dir.path(), Some(output.clone()), false), None).unwrap();

        let module = fs::read_to_string(&output).unwrap();
        assert!(module.starts_with("import { GDTAnalysis } from '@/lib/types';"));
        assert!(module.contains("export const acmeseltzerAnalysis: GDTAnalysis = {"));

        let report_path = dir.path().join("out").join("acme-seltzer-conversion-report.md");
        let rendered = fs::read_to_string(report_path).unwrap();
        assert!(rendered.starts_with("# GDT Conversion Report: Acme Seltzer"));
    }

    #[test]
    fn test_strict_mode_fails_on_incomplete() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(bundle::SUMMARY_FILE), r#"{"brand_name": "Acme"}"#).unwrap();
        let output = dir.path().join("acme.ts");

        let err = execute(args(dir.path(), Some(output.clone()), true), None).unwrap_err();
        assert!(err.to_string().contains("strict mode"));
        assert!(!output.exists());
    }

    #[test]
    fn test_config_file_supplies_accent_color() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(bundle::SUMMARY_FILE),
            r#"{"brand_name": "Acme", "analysis_date": "2026-03-01"}"#,
        )
        .unwrap();
        let config_path = dir.path().join("custom.toml");
        fs::write(&config_path, "accent_color = \"#123456\"\n").unwrap();
        let output = dir.path().join("acme.ts");

        execute(args(dir.path(), Some(output.clone()), false), Some(&config_path)).unwrap();
        let module = fs::read_to_string(&output).unwrap();
        assert!(module.contains("accentColor: '#123456'"));
    }
}
