//! Markdown rendering of the conversion report

use std::fmt::Write;

use crate::validate::ConversionReport;

/// Render the report as human-readable markdown
pub fn generate(report: &ConversionReport) -> String {
    let tally = report.tally();
    let mut out = String::new();

    let _ = writeln!(out, "# GDT Conversion Report: {}", report.brand_name);
    out.push('\n');
    let _ = writeln!(out, "**Generated:** {}", report.timestamp);
    let _ = writeln!(out, "**Total Score:** {}", report.total_score);
    out.push('\n');
    out.push_str("## Summary\n\n");
    out.push_str("| Status | Count |\n|--------|-------|\n");
    let _ = writeln!(out, "| Complete | {}/{} |", tally.complete, tally.total);
    let _ = writeln!(out, "| Derived from Rationale | {}/{} |", tally.derived, tally.total);
    let _ = writeln!(out, "| Incomplete | {}/{} |", tally.incomplete, tally.total);
    out.push('\n');

    out.push_str("## Component Status\n\n");
    out.push_str("| ID | Name | WSN | Strengths | Weaknesses | Status |\n");
    out.push_str("|----|------|-----|-----------|------------|--------|\n");
    for comp in &report.components {
        let wsn_mark = if comp.wsn_complete {
            "✅"
        } else if comp.wsn_derived_from_rationale {
            "⚠️"
        } else {
            "❌"
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            comp.component_id.to_uppercase(),
            comp.component_name,
            wsn_mark,
            mark(comp.has_strengths),
            mark(comp.has_weaknesses),
            comp.overall_status(),
        );
    }

    let incomplete: Vec<_> =
        report.components.iter().filter(|c| !c.wsn_missing_fields.is_empty()).collect();
    if !incomplete.is_empty() {
        out.push_str("\n## Missing WSN Fields\n\n");
        for comp in incomplete {
            let _ = writeln!(
                out,
                "### {}: {}",
                comp.component_id.to_uppercase(),
                comp.component_name
            );
            let _ = writeln!(out, "Missing: {}", comp.wsn_missing_fields.join(", "));
            out.push('\n');
        }
    }

    if !report.warnings.is_empty() {
        out.push_str("## Warnings\n\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "- {}", warning);
        }
        out.push('\n');
    }

    if !report.errors.is_empty() {
        out.push_str("## Errors\n\n");
        for error in &report.errors {
            let _ = writeln!(out, "- ❌ {}", error);
        }
        out.push('\n');
    }

    out
}

fn mark(flag: bool) -> &'static str {
    if flag { "✅" } else { "❌" }
}
