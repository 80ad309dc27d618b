use super::client::CommitSource;
use crate::error::Result;
use crate::model::{CommitRecord, RepoId};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

pub const PER_PAGE: u32 = 100;

/// Fetch the complete commit list, one page at a time, until an empty page comes back.
///
/// Records keep the API's order (newest first). Any failure aborts the whole
/// fetch; pages already received are discarded.
pub fn fetch_commits<S: CommitSource + ?Sized>(
    source: &S,
    repo: &RepoId,
    token: Option<&str>,
) -> Result<Vec<CommitRecord>> {
    fetch_commits_with_progress(source, repo, token, |_, _| {})
}

/// Same as [`fetch_commits`], calling `on_page(page, total_so_far)` after each non-empty page.
pub fn fetch_commits_with_progress<S, F>(
    source: &S,
    repo: &RepoId,
    token: Option<&str>,
    mut on_page: F,
) -> Result<Vec<CommitRecord>>
where
    S: CommitSource + ?Sized,
    F: FnMut(u32, usize),
{
    let mut commits = Vec::new();
    let mut page = 1u32;

    loop {
        debug!(%repo, page, "requesting commit page");
        let data = source.fetch_page(repo, page, PER_PAGE, token)?;
        if data.is_empty() {
            break;
        }

        commits.extend(data);
        on_page(page, commits.len());
        page += 1;
    }

    info!(%repo, commits = commits.len(), pages = page - 1, "fetched commit history");
    Ok(commits)
}

pub fn fetch_commits_with_spinner<S: CommitSource + ?Sized>(
    source: &S,
    repo: &RepoId,
    token: Option<&str>,
    show_progress: bool,
) -> Result<Vec<CommitRecord>> {
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching commits from {repo}..."));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = fetch_commits_with_progress(source, repo, token, |page, total| {
        pb.set_message(format!("Fetched page {page} ({total} commits)"));
        pb.tick();
    });

    match &result {
        Ok(commits) => pb.finish_with_message(format!("{} commits fetched", commits.len())),
        Err(_) => pb.finish_and_clear(),
    }
    result
}
