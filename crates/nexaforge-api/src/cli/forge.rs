//! `nexaforge forge`: run one pipeline from a request file.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use nexaforge_core::agent::StageSource;
use nexaforge_core::pipeline::orchestrator::PipelineReport;
use nexaforge_core::validation::validate_request;
use nexaforge_types::forge::ForgeRequest;

use crate::cli::project::print_blueprint;
use crate::state::AppState;

/// Read, validate, and forge a request file.
///
/// ```bash
/// nexaforge forge aurora.json
/// nexaforge forge aurora.json --json > blueprint.json
/// ```
pub async fn forge(state: &AppState, path: &Path, json: bool) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let request: ForgeRequest = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid forge request", path.display()))?;
    validate_request(&request).context("forge request rejected")?;

    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
        spinner.set_message(format!("Forging {}...", request.project_name));
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    };

    let run = state.pipeline.run(&request).await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&run.response)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Blueprint forged for {}",
        style("✓").green().bold(),
        style(&request.project_name).cyan()
    );
    print_blueprint(&run.response);
    print_report(&run.report);

    Ok(())
}

fn print_report(report: &PipelineReport) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Stage").fg(Color::White),
        Cell::new("Source").fg(Color::White),
    ]);
    for stage in &report.stages {
        let source = match stage.source {
            StageSource::Model => Cell::new("● model").fg(Color::Green),
            StageSource::Fallback => Cell::new("○ fallback").fg(Color::Yellow),
        };
        table.add_row(vec![Cell::new(stage.stage), source]);
    }
    println!("{table}");

    if report.side_effect_failures.is_empty() {
        println!();
        return;
    }
    println!();
    for failure in &report.side_effect_failures {
        println!(
            "  {} {} failed: {}",
            style("✗").red(),
            failure.component,
            style(&failure.error).dim()
        );
    }
    println!();
}
