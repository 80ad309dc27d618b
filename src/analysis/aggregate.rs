use super::WEEKDAY_NAMES;
use crate::model::{CommitRow, FrequencyEntry, HourCount};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SAMPLE_MESSAGE_LIMIT: usize = 10;

/// Row order of the weekday frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekdayOrder {
    /// Monday through Sunday.
    #[default]
    Canonical,
    /// Order in which each weekday first appears in the commit list.
    FirstSeen,
    /// Most commits first; ties keep Monday..Sunday order.
    ByCount,
}

impl WeekdayOrder {
    pub fn next(self) -> Self {
        match self {
            WeekdayOrder::Canonical => WeekdayOrder::FirstSeen,
            WeekdayOrder::FirstSeen => WeekdayOrder::ByCount,
            WeekdayOrder::ByCount => WeekdayOrder::Canonical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeekdayOrder::Canonical => "Mon-Sun",
            WeekdayOrder::FirstSeen => "first seen",
            WeekdayOrder::ByCount => "by count",
        }
    }
}

/// Commits per hour of day, ascending, listing only hours that occur.
pub fn hour_counts(rows: &[CommitRow]) -> Vec<HourCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.hour_of_day).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(hour, count)| HourCount { hour, count })
        .collect()
}

/// Commits per weekday name, listing only weekdays that occur.
pub fn weekday_counts(rows: &[CommitRow], order: WeekdayOrder) -> Vec<FrequencyEntry> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        let name = row.weekday_name.as_str();
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            first_seen.push(name);
        }
        *count += 1;
    }

    let canonical = || {
        WEEKDAY_NAMES
            .iter()
            .filter_map(|name| counts.get(name).map(|&count| FrequencyEntry::new(*name, count)))
            .collect::<Vec<_>>()
    };

    match order {
        WeekdayOrder::Canonical => canonical(),
        WeekdayOrder::FirstSeen => first_seen
            .into_iter()
            .map(|name| FrequencyEntry::new(name, counts[name]))
            .collect(),
        WeekdayOrder::ByCount => {
            let mut entries = canonical();
            entries.sort_by(|a, b| b.count.cmp(&a.count));
            entries
        }
    }
}

/// Mean message length in characters. `None` for no rows.
pub fn average_message_length(rows: &[CommitRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let total: usize = rows.iter().map(|row| row.message.chars().count()).sum();
    Some(total as f64 / rows.len() as f64)
}

/// The first `limit` messages in fetch order.
pub fn sample_messages(rows: &[CommitRow], limit: usize) -> Vec<String> {
    rows.iter().take(limit).map(|row| row.message.clone()).collect()
}
