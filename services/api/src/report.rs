use crate::infra::{load_scenario, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use ev_policy::error::AppError;
use ev_policy::policy::{
    PolicyDecisionEngine, RecommendationGroup, ScenarioComparison, ScenarioImporter,
    ScenarioReport,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Scenario JSON file. Defaults to the national baseline.
    #[arg(long)]
    pub(crate) scenario: Option<PathBuf>,
    /// Roadmap start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Scenario JSON file to compare
    #[arg(long)]
    pub(crate) scenario: PathBuf,
    /// Second scenario JSON file. Defaults to the national baseline.
    #[arg(long)]
    pub(crate) against: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV sheet with one scenario per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Roadmap start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Print one JSON summary per row instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        scenario,
        start,
        json,
    } = args;

    let engine = PolicyDecisionEngine::default();
    let scenario = match scenario {
        Some(path) => load_scenario(&path)?,
        None => engine.baseline_scenario(),
    };
    let start = start.unwrap_or_else(|| Local::now().date_naive());
    let report = engine.evaluate(&scenario, start);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let engine = PolicyDecisionEngine::default();
    let scenario = load_scenario(&args.scenario)?;
    let (against, label) = match args.against {
        Some(path) => (load_scenario(&path)?, path.display().to_string()),
        None => (engine.baseline_scenario(), "national baseline".to_string()),
    };

    let comparison = engine.compare(&scenario, &against);
    print!(
        "{}",
        render_comparison(&args.scenario.display().to_string(), &label, &comparison)
    );
    Ok(())
}

/// One line of the import summary.
#[derive(Debug, Serialize)]
pub(crate) struct ImportSummary {
    pub(crate) name: String,
    pub(crate) infrastructure_pressure: &'static str,
    pub(crate) grid_risk: &'static str,
    pub(crate) urgency: &'static str,
    pub(crate) recommendations: usize,
    pub(crate) grid_overloaded: bool,
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let engine = PolicyDecisionEngine::default();
    let start = args.start.unwrap_or_else(|| Local::now().date_naive());
    let scenarios = ScenarioImporter::from_path(&args.csv)?;

    let summaries: Vec<ImportSummary> = scenarios
        .into_iter()
        .map(|imported| {
            let report = engine.evaluate(&imported.scenario, start);
            summarize(imported.name, &report)
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Imported {} scenario(s) from {}", summaries.len(), args.csv.display());
    for summary in &summaries {
        println!(
            "- {}: pressure {} | grid {} | {} | {} recommendation(s){}",
            summary.name,
            summary.infrastructure_pressure,
            summary.grid_risk,
            summary.urgency,
            summary.recommendations,
            if summary.grid_overloaded {
                " | GRID OVERLOADED"
            } else {
                ""
            }
        );
    }
    Ok(())
}

pub(crate) fn summarize(name: String, report: &ScenarioReport) -> ImportSummary {
    ImportSummary {
        name,
        infrastructure_pressure: report.assessment.infrastructure_pressure.label(),
        grid_risk: report.assessment.grid_risk.label(),
        urgency: report.assessment.urgency_level.label(),
        recommendations: report.recommendations.len(),
        grid_overloaded: report.grid_impact.is_grid_overloaded,
    }
}

pub(crate) fn render_report(report: &ScenarioReport) -> String {
    let assessment = &report.assessment;
    let impact = &report.grid_impact;
    let mut out = String::new();

    let _ = writeln!(out, "EV policy scenario report");
    let _ = writeln!(
        out,
        "- {} EVs | {} public chargers | {:.1}:1 EV-to-charger ratio",
        report.scenario.total_evs, report.scenario.public_chargers, assessment.ev_to_charger_ratio
    );
    let _ = writeln!(
        out,
        "- Infrastructure pressure {} ({:.2}) | Grid risk {} ({:.2})",
        assessment.infrastructure_pressure.label(),
        assessment.infrastructure_score,
        assessment.grid_risk.label(),
        assessment.grid_score
    );
    let _ = writeln!(
        out,
        "- Financial viability {} | Social acceptance {} | Urgency {} | Focus {}",
        assessment.financial_viability.label(),
        assessment.social_acceptance.label(),
        assessment.urgency_level.label(),
        assessment.recommendation_priority.label()
    );

    let _ = writeln!(out, "\nGrid impact");
    let _ = writeln!(
        out,
        "- +{} MW peak demand | {} MW total | {}% of capacity | {} MW DG needed | {} risk{}",
        impact.additional_demand_mw,
        impact.total_demand_mw,
        impact.grid_capacity_utilization,
        impact.dg_capacity_needed,
        impact.grid_risk_level.label(),
        if impact.is_grid_overloaded {
            " | OVERLOADED"
        } else {
            ""
        }
    );

    let progress = &report.target_progress;
    let _ = writeln!(
        out,
        "- Targets: {}% of 2030 fleet | {}% of 2050 fleet | {}% of 2025 stations",
        progress.ev_2030_pct, progress.ev_2050_pct, progress.charging_stations_pct
    );

    let _ = writeln!(out, "\nRecommendations ({})", report.recommendations.len());
    for record in &report.recommendations {
        let _ = writeln!(
            out,
            "- [{}] {} ({}, {})",
            record.priority.label(),
            record.title,
            record.category.label(),
            record.timeframe
        );
    }

    let grid_items = report.recommendations.in_group(RecommendationGroup::GridAndEnergy);
    if !grid_items.is_empty() {
        let _ = writeln!(out, "Grid & energy focus: {}", grid_items.len());
    }

    let _ = writeln!(out, "\nRoadmap");
    for phase in &report.roadmap {
        let _ = writeln!(
            out,
            "- {} {} -> {} | {} | {} | {}",
            phase.phase, phase.start, phase.end, phase.responsible, phase.budget, phase.tasks
        );
    }

    out
}

pub(crate) fn render_comparison(
    first: &str,
    second: &str,
    comparison: &ScenarioComparison,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparing {first} with {second}");
    if comparison.differences.is_empty() {
        let _ = writeln!(out, "- No material differences");
    }
    for line in &comparison.differences {
        let _ = writeln!(out, "- {line}");
    }
    let _ = writeln!(
        out,
        "- Recommendation count difference: {:+}",
        comparison.recommendation_difference
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    #[test]
    fn baseline_report_lists_assessment_and_roadmap() {
        let engine = PolicyDecisionEngine::default();
        let report = engine.evaluate(&engine.baseline_scenario(), start());
        let text = render_report(&report);

        assert!(text.contains("12500 EVs | 156 public chargers | 80.1:1"));
        assert!(text.contains("Infrastructure pressure Medium"));
        assert!(text.contains("+31.25 MW peak demand | 131.25 MW total | 57.1% of capacity"));
        assert!(text.contains("[High] Policy Coordination Framework"));
        assert!(text.contains("Phase 1: Foundation 2025-01-01 -> 2025-06-30"));
        assert!(!text.contains("OVERLOADED"));
    }

    #[test]
    fn comparison_with_itself_has_no_differences() {
        let engine = PolicyDecisionEngine::default();
        let baseline = engine.baseline_scenario();
        let comparison = engine.compare(&baseline, &baseline);
        let text = render_comparison("baseline", "baseline", &comparison);

        assert!(text.contains("No material differences"));
        assert!(text.contains("Recommendation count difference: +0"));
    }

    #[test]
    fn import_summary_carries_labels() {
        let engine = PolicyDecisionEngine::default();
        let report = engine.evaluate(&engine.baseline_scenario(), start());
        let summary = summarize("Baseline".to_string(), &report);

        assert_eq!(summary.infrastructure_pressure, "Medium");
        assert_eq!(summary.urgency, "Medium Priority");
        assert_eq!(summary.recommendations, 2);
        assert!(!summary.grid_overloaded);
    }
}
