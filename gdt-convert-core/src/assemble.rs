//! Record assembler
//!
//! Merges per-component extractions with the summary rollups into the final
//! [`GdtAnalysis`] record and builds the conversion report as it goes. Best
//! effort throughout: a component with no document still gets an entry, fed
//! from the rollup with an empty narrative.

use chrono::Local;
use gdt_patterns::slug;
use tracing::{debug, info};

use crate::bundle::AnalysisBundle;
use crate::component::ComponentId;
use crate::extract::{self, ComponentExtraction, SourceKind};
use crate::model::{
    BrandConfig, ComponentData, ComponentScore, GdtAnalysis, GrowthBarrier, GrowthBarrierItem,
    GrowthPhase, GrowthProfile, GrowthSolution, GrowthSystem, GrowthSystemOutput, SectionScore,
    WsnContent,
};
use crate::resolve;
use crate::summary::{BarrierBlock, SolutionBlock, SummaryDoc, SystemBlock};
use crate::validate::{ComponentValidation, ConversionReport};
use crate::DEFAULT_ACCENT_COLOR;

/// Flattened solution actions are capped at this many entries
const MAX_ACTIONS: usize = 3;

/// Knobs the caller may set per run
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Brand accent color; falls back to [`DEFAULT_ACCENT_COLOR`]
    pub accent_color: Option<String>,
}

/// Convert a loaded bundle into the output record plus its report
pub fn convert(bundle: &AnalysisBundle, options: &ConvertOptions) -> (GdtAnalysis, ConversionReport) {
    let summary = &bundle.summary;
    let mut report = ConversionReport::new(
        &summary.brand_name,
        &Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        summary.total_score,
    );
    report.warnings.extend(bundle.warnings.iter().cloned());

    let accent_color =
        options.accent_color.clone().unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string());
    let brand = BrandConfig {
        id: slug::slugify(&summary.brand_name),
        name: summary.brand_name.clone(),
        market: summary.market.clone(),
        category: summary.category.clone(),
        date: summary
            .analysis_date
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string()),
        accent_color,
    };

    let sections = build_sections(summary);
    let mut components = Vec::with_capacity(ComponentId::ALL.len());

    for id in ComponentId::ALL {
        let rollup = rollup_for(&sections, id);
        match bundle.documents.get(&id) {
            Some(source) => {
                let extraction = extract::extract(id, source);
                let (component, validation) = build_component(id, extraction, rollup.as_ref());
                for warning in &validation.warnings {
                    report.warnings.push(format!("[{}] {}", id.as_str().to_uppercase(), warning));
                }
                report.components.push(validation);
                components.push(component);
            }
            None => {
                debug!(component = %id, "building entry from summary rollup");
                let (component, validation) = build_rollup_component(id, rollup.as_ref());
                report.components.push(validation);
                components.push(component);
            }
        }
    }

    let analysis = GdtAnalysis {
        brand,
        total_score: summary.total_score,
        growth_profile: build_profile(summary),
        sections,
        components,
        growth_barrier: build_barrier(&summary.growth_barrier),
        growth_solution: build_solution(&summary.growth_solution),
        growth_system: build_system(&summary.growth_system),
    };

    let tally = report.tally();
    info!(
        brand = %summary.brand_name,
        complete = tally.complete,
        derived = tally.derived,
        incomplete = tally.incomplete,
        "assembled output record"
    );

    (analysis, report)
}

fn build_sections(summary: &SummaryDoc) -> Vec<SectionScore> {
    [("A", &summary.section_a), ("B", &summary.section_b), ("C", &summary.section_c)]
        .into_iter()
        .map(|(section_id, block)| SectionScore {
            id: section_id.to_string(),
            name: block.name.clone(),
            score: block.total_rating,
            tier: block.descriptor.clone(),
            components: block
                .components
                .iter()
                .map(|comp| ComponentScore {
                    id: comp.code.to_lowercase(),
                    name: comp.name.clone(),
                    score: comp.rating,
                    tier: comp.descriptor.clone(),
                    section: section_id.to_string(),
                })
                .collect(),
        })
        .collect()
}

fn rollup_for(sections: &[SectionScore], id: ComponentId) -> Option<ComponentScore> {
    sections
        .iter()
        .flat_map(|section| section.components.iter())
        .find(|comp| comp.id == id.as_str())
        .cloned()
}

/// Resolve one extracted component against the rollup and run the
/// completeness pass
fn build_component(
    id: ComponentId,
    extraction: ComponentExtraction,
    rollup: Option<&ComponentScore>,
) -> (ComponentData, ComponentValidation) {
    let name = if !extraction.name.is_empty() {
        extraction.name.clone()
    } else {
        rollup.map(|r| r.name.clone()).unwrap_or_else(|| id.display_name().to_string())
    };
    let score = if extraction.score != 0.0 {
        extraction.score
    } else {
        rollup.map(|r| r.score).unwrap_or(0.0)
    };
    let tier = if !extraction.tier.is_empty() {
        extraction.tier.clone()
    } else {
        rollup.map(|r| r.tier.clone()).unwrap_or_default()
    };

    let mut validation = ComponentValidation::new(id.as_str(), &name, extraction.source);
    validation.wsn_missing_fields = resolve::missing_fields(&extraction.wsn);
    validation.wsn_complete = resolve::is_complete(&extraction.wsn);
    validation.set_deep_dive_flags(
        extraction.strengths.len(),
        extraction.weaknesses.len(),
        extraction.competitive_context.len(),
        extraction.score_breakdown.len(),
        extraction.rationale.len(),
    );

    let mut wsn = extraction.wsn;
    if !validation.wsn_complete && validation.has_rationale {
        let derived = resolve::derive_from_rationale(
            &extraction.rationale,
            &extraction.competitive_context,
            &tier,
        );
        let (merged, derived_fields) = resolve::merge(&wsn, &derived);
        wsn = merged;
        if !derived_fields.is_empty() {
            validation.wsn_derived_from_rationale = true;
            validation
                .warnings
                .push(format!("WSN fields derived from rationale: {}", derived_fields.join(", ")));
        }
    }

    let component = ComponentData {
        id: id.as_str().to_string(),
        name,
        section: id.section().to_string(),
        score,
        tier,
        wsn,
        strengths: extraction.strengths,
        weaknesses: extraction.weaknesses,
        competitive_context: extraction.competitive_context,
        score_breakdown: extraction.score_breakdown,
    };
    (component, validation)
}

/// Minimal entry for a component with no document at all
fn build_rollup_component(
    id: ComponentId,
    rollup: Option<&ComponentScore>,
) -> (ComponentData, ComponentValidation) {
    let name =
        rollup.map(|r| r.name.clone()).unwrap_or_else(|| id.display_name().to_string());
    let mut validation = ComponentValidation::new(id.as_str(), &name, SourceKind::Rollup);
    validation.wsn_missing_fields = resolve::missing_fields(&WsnContent::default());

    let component = ComponentData {
        id: id.as_str().to_string(),
        name,
        section: id.section().to_string(),
        score: rollup.map(|r| r.score).unwrap_or(0.0),
        tier: rollup.map(|r| r.tier.clone()).unwrap_or_default(),
        wsn: WsnContent::default(),
        strengths: Vec::new(),
        weaknesses: Vec::new(),
        competitive_context: String::new(),
        score_breakdown: Default::default(),
    };
    (component, validation)
}

fn build_profile(summary: &SummaryDoc) -> GrowthProfile {
    let sequence = summary
        .growth_system
        .critical_path
        .steps()
        .iter()
        .map(|step| step.split(" (").next().unwrap_or(step).to_string())
        .collect::<Vec<_>>()
        .join(" → ");

    let id = slug::slugify(&summary.growth_profile.name);
    GrowthProfile {
        id: if id.is_empty() { "unknown".to_string() } else { id },
        name: summary.growth_profile.name.clone(),
        sequence,
        definition: summary.growth_profile.definition.clone(),
        implications: summary.growth_profile.implications.clone(),
    }
}

fn build_barrier(block: &BarrierBlock) -> GrowthBarrier {
    GrowthBarrier {
        headline: block.headline.clone(),
        description: block.problem_statement.clone(),
        items: block
            .constraints()
            .map(|constraint| GrowthBarrierItem {
                // Keep the lead clause; trailing qualifiers belong in the evidence
                constraint: constraint
                    .constraint
                    .split(" with ")
                    .next()
                    .and_then(|head| head.split(" while ").next())
                    .unwrap_or(&constraint.constraint)
                    .to_string(),
                component: constraint.component_code.clone(),
                score: constraint.score,
                evidence: constraint.evidence.clone(),
            })
            .collect(),
    }
}

fn build_solution(block: &SolutionBlock) -> GrowthSolution {
    GrowthSolution {
        headline: block.headline.clone(),
        description: block.solution_statement.clone(),
        actions: block
            .unlocks()
            .filter(|unlock| !unlock.unlock_name.is_empty() && !unlock.description.is_empty())
            .map(|unlock| format!("{}: {}", unlock.unlock_name, unlock.description))
            .take(MAX_ACTIONS)
            .collect(),
    }
}

fn build_system(block: &SystemBlock) -> GrowthSystem {
    GrowthSystem {
        headline: block.headline.clone(),
        description: block.system_description.clone(),
        phases: block
            .products
            .iter()
            .map(|product| GrowthPhase {
                phase: product.product_name.clone(),
                description: product.strategic_focus.clone(),
                outputs: product
                    .outputs
                    .iter()
                    .map(|output| GrowthSystemOutput {
                        name: output.output_name.clone(),
                        score: output.relevance_score,
                        purpose: output.purpose.clone(),
                        components_addressed: output.critical_components.clone(),
                        deliverables: output.key_deliverables.clone(),
                    })
                    .collect(),
            })
            .collect(),
        critical_path: block.critical_path.joined(),
        implementation_notes: block.implementation_considerations.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle;
    use crate::validate::CompletionStatus;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn summary_json() -> String {
        serde_json::json!({
            "brand_name": "Acme Seltzer",
            "market": "USA",
            "category": "Beverages",
            "analysis_date": "2026-03-01",
            "total_score": 53.6,
            "growth_profile": {
                "name": "Cultural Insurgent",
                "definition": "Strong scene credibility, limited reach.",
                "implications": "Growth depends on widening the audience."
            },
            "section_a": {
                "name": "Commercial Foundation",
                "total_rating": 17.2,
                "descriptor": "Average",
                "components": [
                    {"code": "A1", "name": "Brand Positioning", "rating": 6.1, "descriptor": "Solid"},
                    {"code": "A2", "name": "Pricing Power", "rating": 5.2, "descriptor": "Average"},
                    {"code": "A3", "name": "Business Growth", "rating": 5.9, "descriptor": "Average"}
                ]
            },
            "section_b": {
                "name": "Emotional Connection",
                "total_rating": 18.0,
                "descriptor": "Solid",
                "components": [
                    {"code": "B1", "name": "Emotional Connection", "rating": 6.4, "descriptor": "Solid"},
                    {"code": "B2", "name": "Cultural Relevance", "rating": 5.4, "descriptor": "Average"},
                    {"code": "B3", "name": "Brand Experience", "rating": 6.2, "descriptor": "Solid"}
                ]
            },
            "section_c": {
                "name": "Future Readiness",
                "total_rating": 18.4,
                "descriptor": "Solid",
                "components": [
                    {"code": "C1", "name": "Brand Distinctiveness", "rating": 6.8, "descriptor": "Solid"},
                    {"code": "C2", "name": "Brand Innovation", "rating": 5.7, "descriptor": "Average"},
                    {"code": "C3", "name": "Disruption Urgency", "rating": 5.9, "descriptor": "Average"}
                ]
            },
            "growth_barrier": {
                "headline": "Reach ceiling",
                "problem_statement": "The brand cannot grow past its core scene.",
                "constraint_1": {
                    "constraint": "Narrow distribution with weak retail presence",
                    "component_code": "A3",
                    "score": 5.9,
                    "evidence": "Only 12% ACV in grocery."
                },
                "constraint_3": {
                    "constraint": "Low awareness while rivals spend heavily",
                    "component_code": "B2",
                    "score": 5.4,
                    "evidence": "Aided awareness at 18%."
                }
            },
            "growth_solution": {
                "headline": "Widen the scene",
                "solution_statement": "Extend credibility into adjacent audiences.",
                "unlock_1": {"unlock_name": "Define", "description": "Sharpen the core promise"},
                "unlock_3": {"unlock_name": "Extend", "description": "Enter adjacent scenes"}
            },
            "growth_system": {
                "headline": "Phased growth system",
                "system_description": "Three products in sequence.",
                "products": [
                    {
                        "product_name": "Foundation",
                        "strategic_focus": "Fix positioning first",
                        "outputs": [
                            {
                                "output_name": "Positioning House",
                                "relevance_score": 9.0,
                                "purpose": "Anchor the promise",
                                "critical_components": ["A1", "B1"],
                                "key_deliverables": ["Messaging map", "Audience model"]
                            }
                        ]
                    }
                ],
                "critical_path": ["Position (A1)", "Connect (B1)", "Extend (B2)"],
                "implementation_considerations": "Sequence matters more than speed."
            }
        })
        .to_string()
    }

    fn component_markdown(id: &str, name: &str) -> String {
        format!(
            "# {id_upper}: {name}\n\n\
             **Score:** 6.4/10\n\
             **Tier:** Solid\n\n\
             ## Summary\n\n\
             **A clear headline about the component**\n\n\
             *A supporting subline with detail*\n\n\
             **What:** Buyers in the core scene show strong unprompted recall.\n\
             *Evidence: Recall at 64% among scene members.*\n\n\
             **So What:** The brand holds real equity it has not monetized.\n\n\
             **Now What:** Fund two adjacent-scene activation programs.\n\n\
             ---\n\n\
             ## Deep Dive\n\n\
             ### Strengths\n\
             - Strong community ties\n\
             - Distinctive visual identity\n\n\
             ### Weaknesses\n\
             - Narrow retail footprint\n\
             - Low aided awareness\n\n\
             ### Competitive Context\n\
             Rivals outspend the brand three to one in paid media.\n\n\
             ### Rating Rationale\n\
             The brand earns a solid rating because equity is real but reach stays limited. \
             Most consumers never encounter it. This gap means growth stalls. \
             The team should fund adjacent programs.\n\n\
             ## Score Breakdown\n\
             | Dimension | Score |\n\
             |-----------|-------|\n\
             | Community Strength | 8.0 |\n\
             | Reach | 4.5 |\n",
            id_upper = id.to_uppercase(),
            name = name,
        )
    }

    fn write_full_bundle(dir: &Path) {
        write(dir, bundle::SUMMARY_FILE, &summary_json());
        for id in ComponentId::ALL {
            write(dir, id.markdown_filename(), &component_markdown(id.as_str(), id.display_name()));
        }
    }

    #[test]
    fn test_full_bundle_all_components_complete() {
        let dir = tempfile::tempdir().unwrap();
        write_full_bundle(dir.path());

        let loaded = bundle::load(dir.path()).unwrap();
        let (analysis, report) = convert(&loaded, &ConvertOptions::default());

        assert_eq!(analysis.components.len(), 9);
        assert_eq!(report.components.len(), 9);
        for validation in &report.components {
            assert!(validation.wsn_complete, "component {} incomplete", validation.component_id);
            assert!(!validation.wsn_derived_from_rationale);
            assert_eq!(validation.overall_status(), CompletionStatus::Complete);
        }
        assert!(!report.warnings.iter().any(|w| w.contains("derived")));
        assert_eq!(report.tally().complete, 9);
    }

    #[test]
    fn test_idempotent_record_output() {
        let dir = tempfile::tempdir().unwrap();
        write_full_bundle(dir.path());

        let loaded = bundle::load(dir.path()).unwrap();
        let (first, _) = convert(&loaded, &ConvertOptions::default());
        let (second, _) = convert(&loaded, &ConvertOptions::default());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_component_falls_back_to_rollup() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), bundle::SUMMARY_FILE, &summary_json());
        for id in ComponentId::ALL {
            if id != ComponentId::B2 {
                write(
                    dir.path(),
                    id.markdown_filename(),
                    &component_markdown(id.as_str(), id.display_name()),
                );
            }
        }

        let loaded = bundle::load(dir.path()).unwrap();
        let (analysis, report) = convert(&loaded, &ConvertOptions::default());

        let b2 = analysis.components.iter().find(|c| c.id == "b2").unwrap();
        assert_eq!(b2.name, "Cultural Relevance");
        assert_eq!(b2.score, 5.4);
        assert_eq!(b2.tier, "Average");
        assert_eq!(b2.wsn, WsnContent::default());

        let validation = report.components.iter().find(|v| v.component_id == "b2").unwrap();
        assert_eq!(validation.source, "rollup");
        assert!(!validation.wsn_complete);
        assert!(report.warnings.iter().any(|w| w.contains("[b2]")));
    }

    #[test]
    fn test_placeholder_wsn_derived_from_rationale() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), bundle::SUMMARY_FILE, &summary_json());
        let md = "# B2: Cultural Relevance\n\n\
            **Score:** 5.4/10\n\
            **Tier:** Average\n\n\
            ## Summary\n\n\
            **Assessment pending**\n\n\
            **What:** TBD\n\n\
            **So What:** TBD\n\n\
            **Now What:** TBD\n\n\
            ---\n\n\
            ## Deep Dive\n\n\
            ### Rating Rationale\n\
            Acme earns an average rating because cultural credibility is real but narrow. \
            Most consumers outside the core scene never encounter the brand. \
            This gap means growth stalls without broader visibility. \
            The team should fund two adjacent-scene programs.\n";
        write(dir.path(), "b2-cultural-relevance.md", md);

        let loaded = bundle::load(dir.path()).unwrap();
        let (analysis, report) = convert(&loaded, &ConvertOptions::default());

        let b2 = analysis.components.iter().find(|c| c.id == "b2").unwrap();
        assert_eq!(b2.wsn.headline, "Cultural credibility is real but narrow.");
        assert!(b2.wsn.what.starts_with("Most consumers"));
        assert!(b2.wsn.now_what.starts_with("The team should"));

        let validation = report.components.iter().find(|v| v.component_id == "b2").unwrap();
        assert!(validation.wsn_derived_from_rationale);
        assert_eq!(validation.overall_status(), CompletionStatus::Derived);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.starts_with("[B2]") && w.contains("derived from rationale")));
    }

    #[test]
    fn test_strategic_block_transforms() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), bundle::SUMMARY_FILE, &summary_json());

        let loaded = bundle::load(dir.path()).unwrap();
        let (analysis, _) = convert(&loaded, &ConvertOptions::default());

        // Constraint lead clauses kept, qualifiers dropped
        let items = &analysis.growth_barrier.items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].constraint, "Narrow distribution");
        assert_eq!(items[1].constraint, "Low awareness");
        assert_eq!(items[1].component, "B2");

        // Only populated unlocks become actions
        assert_eq!(
            analysis.growth_solution.actions,
            vec!["Define: Sharpen the core promise", "Extend: Enter adjacent scenes"]
        );

        assert_eq!(
            analysis.growth_system.critical_path,
            "Position (A1) → Connect (B1) → Extend (B2)"
        );
        assert_eq!(analysis.growth_profile.sequence, "Position → Connect → Extend");
        assert_eq!(analysis.growth_profile.id, "cultural-insurgent");
        assert_eq!(analysis.growth_system.phases[0].outputs[0].name, "Positioning House");
    }

    #[test]
    fn test_brand_config_and_sections() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), bundle::SUMMARY_FILE, &summary_json());

        let loaded = bundle::load(dir.path()).unwrap();
        let options = ConvertOptions { accent_color: Some("#123456".to_string()) };
        let (analysis, report) = convert(&loaded, &options);

        assert_eq!(analysis.brand.id, "acme-seltzer");
        assert_eq!(analysis.brand.date, "2026-03-01");
        assert_eq!(analysis.brand.accent_color, "#123456");
        assert_eq!(analysis.total_score, 53.6);
        assert_eq!(analysis.sections.len(), 3);
        assert_eq!(analysis.sections[1].components[1].id, "b2");
        assert_eq!(analysis.sections[1].components[1].section, "B");
        assert_eq!(report.brand_name, "Acme Seltzer");
    }
}
