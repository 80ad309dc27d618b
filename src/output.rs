use crate::model::{AnalysisReport, ExportOutput, SummaryStats};
use crate::util::message_headline;
use anyhow::Result;
use console::style;

const BAR_WIDTH: usize = 40;

pub fn output_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn output_export_json(export: &ExportOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(export)?);
    Ok(())
}

pub fn output_export_ndjson(export: &ExportOutput) -> Result<()> {
    for row in &export.entries {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub fn output_export_summary(export: &ExportOutput) -> Result<()> {
    println!("{}", style(format!("Commits for {}", export.repository)).bold());
    println!("{}", "─".repeat(50));
    for row in &export.entries {
        println!(
            "{}  {:<9}  {}",
            style(row.timestamp.format("%Y-%m-%d %H:%M")).cyan(),
            row.weekday_name,
            message_headline(&row.message, 60)
        );
    }
    println!("\n{} commits", export.entries.len());
    Ok(())
}

pub fn output_report(report: &AnalysisReport) -> Result<()> {
    println!(
        "{}",
        style(format!("Commit Intelligence: {}", report.repository)).bold()
    );
    println!("{}", "─".repeat(50));

    println!("\n{}", style("Key Metrics").bold());
    for (label, value) in metric_lines(&report.stats) {
        println!("  {:<20} {}", label, style(value).green());
    }

    println!("\n{}", style("Commits by Hour").bold());
    let hours = report
        .hour_counts
        .iter()
        .map(|e| (format!("{:>2}:00", e.hour), e.count));
    for line in bar_lines(hours) {
        println!("  {line}");
    }

    println!("\n{}", style("Commits by Weekday").bold());
    let weekdays = report
        .weekday_counts
        .iter()
        .map(|e| (e.label.clone(), e.count));
    for line in bar_lines(weekdays) {
        println!("  {line}");
    }

    println!("\n{}", style("Commit Message Insights").bold());
    println!(
        "  Average commit message length: {} characters",
        style(report.avg_message_length.trunc() as u64).cyan()
    );
    println!("\n  Sample commit messages:");
    for (i, message) in report.sample_messages.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, message_headline(message, 72));
    }

    Ok(())
}

/// The four headline metrics as `(label, formatted value)` pairs.
pub fn metric_lines(stats: &SummaryStats) -> [(&'static str, String); 4] {
    [
        ("Total Commits", stats.total_commits.to_string()),
        ("Active Days", stats.active_days.to_string()),
        ("Avg Commits / Day", format!("{:.2}", stats.avg_commits_per_day)),
        ("Most Active Hour", format!("{}:00", stats.most_active_hour)),
    ]
}

/// Horizontal bar rows scaled to the largest count.
pub fn bar_lines<I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, usize)>,
{
    let rows: Vec<(String, usize)> = rows.into_iter().collect();
    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    rows.into_iter()
        .map(|(label, count)| {
            let filled = if max == 0 {
                0
            } else {
                ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
            };
            let filled = filled.max(usize::from(count > 0));
            format!("{label:<width$} │{} {count}", "█".repeat(filled))
        })
        .collect()
}
