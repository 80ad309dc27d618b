use super::aggregate::{
    average_message_length, hour_counts, sample_messages, weekday_counts, WeekdayOrder,
    SAMPLE_MESSAGE_LIMIT,
};
use crate::model::{AnalysisReport, CommitRow, ExportOutput, RepoId, SummaryStats, SCHEMA_VERSION};
use chrono::Utc;

pub fn build_report(
    repo: &RepoId,
    rows: &[CommitRow],
    stats: SummaryStats,
    order: WeekdayOrder,
) -> AnalysisReport {
    AnalysisReport {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: repo.to_string(),
        stats,
        hour_counts: hour_counts(rows),
        weekday_counts: weekday_counts(rows, order),
        avg_message_length: average_message_length(rows).unwrap_or(0.0),
        sample_messages: sample_messages(rows, SAMPLE_MESSAGE_LIMIT),
    }
}

pub fn build_export(repo: &RepoId, rows: Vec<CommitRow>) -> ExportOutput {
    ExportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: repo.to_string(),
        entries: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::CommitRecord;

    #[test]
    fn report_tables_agree_with_stats() {
        let records = vec![
            CommitRecord::new("2024-01-01T09:00:00Z", "first"),
            CommitRecord::new("2024-01-01T09:30:00Z", "second"),
            CommitRecord::new("2024-01-02T14:00:00Z", "third commit"),
        ];
        let (rows, stats) = analyze(&records).unwrap();
        let report = build_report(&RepoId::new("o", "r"), &rows, stats, WeekdayOrder::Canonical);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.repository, "o/r");
        let hour_total: usize = report.hour_counts.iter().map(|e| e.count).sum();
        assert_eq!(hour_total, report.stats.total_commits);
        assert_eq!(report.sample_messages, vec!["first", "second", "third commit"]);
        assert!((report.avg_message_length - 23.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn report_serializes_expected_fields() {
        let records = vec![CommitRecord::new("2024-01-01T09:00:00Z", "only")];
        let (rows, stats) = analyze(&records).unwrap();
        let report = build_report(&RepoId::new("o", "r"), &rows, stats, WeekdayOrder::Canonical);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["stats"]["total_commits"], 1);
        assert_eq!(value["stats"]["most_active_hour"], 9);
        assert_eq!(value["weekday_counts"][0]["label"], "Monday");
    }
}
