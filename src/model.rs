use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

/// One element of `GET /repos/{owner}/{repo}/commits`, trimmed to the fields we read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub sha: Option<String>,
    pub commit: CommitPayload,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitPayload {
    pub author: CommitAuthor,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub date: String,
}

impl CommitRecord {
    pub fn new(date: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: None,
            commit: CommitPayload {
                author: CommitAuthor {
                    name: None,
                    email: None,
                    date: date.into(),
                },
                message: message.into(),
            },
            html_url: None,
        }
    }

    pub fn author_date(&self) -> &str {
        &self.commit.author.date
    }

    pub fn message(&self) -> &str {
        &self.commit.message
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRow {
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
    pub hour_of_day: u32,
    pub weekday_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_commits: usize,
    pub active_days: usize,
    pub avg_commits_per_day: f64,
    pub most_active_hour: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Commits made during one hour of the day (0-23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub stats: SummaryStats,
    pub hour_counts: Vec<HourCount>,
    pub weekday_counts: Vec<FrequencyEntry>,
    pub avg_message_length: f64,
    pub sample_messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub entries: Vec<CommitRow>,
}
