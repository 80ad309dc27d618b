pub mod client;
pub mod fetch;

pub use client::{CommitSource, GitHubClient};
pub use fetch::{fetch_commits, fetch_commits_with_progress, fetch_commits_with_spinner, PER_PAGE};
