use crate::infra::sample_sheet;
use clap::Args;
use fundready::error::AppError;
use fundready::scoring::{evaluate, AssessmentSummary, ScoreBand, ScoreSheet, ScoreSheetImporter};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON score sheet (subscore fields, each 0-10)
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Path to a CSV sheet export with the form's column headers
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read(&args.input)?;
    let sheet: ScoreSheet = serde_json::from_slice(&raw)?;

    let summary = evaluate(&sheet).summary();
    render_report(&summary);

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let sheets = ScoreSheetImporter::from_path(&args.csv)?;

    println!("Scored {} sheet(s) from {}", sheets.len(), args.csv.display());
    println!("{:<5} {:>7}  {:<10} {}", "Row", "Total", "Band", "Overview");
    for (index, sheet) in sheets.iter().enumerate() {
        let total = evaluate(sheet).total_score;
        let band = ScoreBand::classify(total);
        println!(
            "{:<5} {:>7.1}  {:<10} {}",
            index + 1,
            total,
            band.label(),
            band.overview()
        );
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Funding readiness demo (built-in sample sheet)");
    let summary = evaluate(&sample_sheet()).summary();
    render_report(&summary);
    Ok(())
}

fn render_report(summary: &AssessmentSummary) {
    let insights = &summary.insights;

    println!();
    println!(
        "Total score: {:.0}/100  [{}]",
        summary.total_score, insights.band_label
    );
    println!("  {}", render_meter(summary.total_score, 100.0));
    println!();

    println!("Category breakdown:");
    for entry in &summary.breakdown {
        println!(
            "  {:<22} {:>5.1}/{:<4} {}",
            entry.category_label,
            entry.score,
            entry.cap,
            render_meter(entry.score, entry.cap)
        );
    }

    println!();
    println!("Recommendations:");
    println!("  Overview:         {}", insights.overview);
    println!("  Next steps:       {}", insights.next_steps);
    println!("  Focus areas:      {}", insights.focus_areas);
    println!("  Funding strategy: {}", insights.funding_strategy);
    if let Some(label) = insights.focus_category_label {
        println!("  Weakest category: {label}");
    }
}

fn render_meter(value: f64, max: f64) -> String {
    const WIDTH: usize = 20;
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
