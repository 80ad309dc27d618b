pub mod aggregate;
pub mod report;

pub use aggregate::{
    average_message_length, hour_counts, sample_messages, weekday_counts, WeekdayOrder,
    SAMPLE_MESSAGE_LIMIT,
};
pub use report::{build_export, build_report};

use crate::error::{GhPulseError, Result};
use crate::model::{CommitRecord, CommitRow, SummaryStats};
use chrono::{DateTime, Datelike, Timelike, Weekday};
use std::collections::HashSet;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Project raw records into rows and compute the summary statistics.
///
/// Hour and weekday are taken in each timestamp's own offset, so a commit
/// authored at 23:30+02:00 counts toward hour 23 of that local day.
pub fn analyze(records: &[CommitRecord]) -> Result<(Vec<CommitRow>, SummaryStats)> {
    if records.is_empty() {
        return Err(GhPulseError::EmptyHistory);
    }

    let rows = records
        .iter()
        .map(to_row)
        .collect::<Result<Vec<_>>>()?;
    let stats = summarize(&rows)?;
    Ok((rows, stats))
}

pub fn to_row(record: &CommitRecord) -> Result<CommitRow> {
    let raw = record.author_date();
    let timestamp =
        DateTime::parse_from_rfc3339(raw).map_err(|source| GhPulseError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        })?;

    Ok(CommitRow {
        timestamp,
        message: record.message().to_string(),
        hour_of_day: timestamp.hour(),
        weekday_name: weekday_name(timestamp.weekday()).to_string(),
    })
}

pub fn summarize(rows: &[CommitRow]) -> Result<SummaryStats> {
    if rows.is_empty() {
        return Err(GhPulseError::EmptyHistory);
    }

    let total_commits = rows.len();
    let active_days = rows
        .iter()
        .map(|row| row.timestamp.date_naive())
        .collect::<HashSet<_>>()
        .len();

    Ok(SummaryStats {
        total_commits,
        active_days,
        avg_commits_per_day: total_commits as f64 / active_days as f64,
        most_active_hour: most_active_hour(rows),
    })
}

/// Modal hour of day; ties go to the earliest hour.
pub fn most_active_hour(rows: &[CommitRow]) -> u32 {
    let mut counts = [0usize; 24];
    for row in rows {
        counts[row.hour_of_day as usize] += 1;
    }

    let mut best = 0usize;
    for hour in 1..counts.len() {
        if counts[hour] > counts[best] {
            best = hour;
        }
    }
    best as u32
}
