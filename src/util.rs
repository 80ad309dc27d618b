use crate::error::{GhPulseError, Result};
use crate::model::RepoId;

/// Parse `owner/repo` or a repository URL such as `https://github.com/owner/repo`.
///
/// The last two path segments name the repository; anything before them
/// (scheme, host) is ignored.
pub fn parse_repo_identifier(input: &str) -> Result<RepoId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GhPulseError::InvalidInput(
            "repository URL is required".to_string(),
        ));
    }

    let parts: Vec<&str> = trimmed.trim_matches('/').split('/').collect();
    if parts.len() < 2 {
        return Err(GhPulseError::InvalidInput(format!(
            "invalid GitHub repository URL '{trimmed}'; expected owner/repo"
        )));
    }

    let owner = parts[parts.len() - 2];
    let repo = parts[parts.len() - 1];
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return Err(GhPulseError::InvalidInput(format!(
            "invalid GitHub repository URL '{trimmed}'; owner and repo must be non-empty"
        )));
    }

    Ok(RepoId::new(owner, repo))
}

/// Treat blank tokens as absent so an empty `GITHUB_TOKEN=` does not send a bogus header.
pub fn normalize_token(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

/// First line of a commit message, truncated to `max` chars with an ellipsis.
pub fn message_headline(message: &str, max: usize) -> String {
    let first = message.lines().next().unwrap_or("");
    if first.chars().count() > max {
        let cut: String = first.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}
