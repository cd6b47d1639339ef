//! Output formatting utilities

use crate::application::{CheckReport, GenerationReport};
use crate::domain::LoadStats;

fn format_stats(stats: &LoadStats) -> String {
    format!(
        "{} entries, {} new forms, {} accent variants, {} duplicates, {} skipped",
        stats.lines, stats.inserted, stats.accent_variants, stats.duplicates, stats.skipped
    )
}

/// Format the per-language summary of a generation run
pub fn format_generation_reports(reports: &[GenerationReport]) -> String {
    if reports.is_empty() {
        return "No languages generated".to_string();
    }

    let mut output = String::new();
    for report in reports {
        output.push_str(&format!(
            "[{}] {} forms from {} files -> {}\n",
            report.language,
            report.total_forms(),
            report.files,
            report.output.display()
        ));
        output.push_str(&format!("     {}\n", format_stats(&report.stats)));
    }
    output
}

/// Format the result of a check run
pub fn format_check_report(report: &CheckReport) -> String {
    let mut output = format!(
        "Checked {} files: {}\n",
        report.files.len(),
        format_stats(&report.stats)
    );

    for (pos, dict) in report.dictionaries.iter() {
        output.push_str(&format!("{:<5} {}\n", pos.as_str(), dict.len()));
    }
    output
}
