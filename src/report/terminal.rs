// Terminal rendering for classification reports.
//
// This module handles all terminal-specific formatting: colors, the metrics
// table, summary rows. The pipeline delegates here and never formats output
// itself.

use colored::Colorize;

use super::{ClassMetrics, ClassReport};

/// Print the full report table to stdout.
pub fn display_report(report: &ClassReport) {
    println!(
        "\n{}",
        format!(
            "=== Classification Report ({} test examples) ===",
            report.total
        )
        .bold()
    );
    println!();

    // Header
    println!(
        "  {:<14} {:>10} {:>10} {:>10} {:>10}",
        "".dimmed(),
        "precision".dimmed(),
        "recall".dimmed(),
        "f1-score".dimmed(),
        "support".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for (class, metrics) in &report.classes {
        print_row(class, metrics, metrics.support);
    }

    println!();
    println!(
        "  {:<14} {:>10} {:>10} {:>10.2} {:>10}",
        "accuracy", "", "", report.accuracy, report.total
    );
    print_row("macro avg", &report.macro_avg, report.total);
    print_row("weighted avg", &report.weighted_avg, report.total);
    println!();
}

fn print_row(name: &str, metrics: &ClassMetrics, support: usize) {
    println!(
        "  {:<14} {:>10.2} {:>10.2} {} {:>10}",
        name,
        metrics.precision,
        metrics.recall,
        colorize_f1(metrics.f1),
        support
    );
}

/// Color the F1 column: strong scores green, weak ones red. Padding happens
/// before coloring — ANSI escapes would otherwise throw off the column width.
fn colorize_f1(f1: f64) -> String {
    let formatted = format!("{f1:>10.2}");
    if f1 >= 0.8 {
        formatted.green().to_string()
    } else if f1 >= 0.5 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}
