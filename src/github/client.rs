use crate::config::Settings;
use crate::error::{GhPulseError, Result};
use crate::model::{CommitRecord, RepoId};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;

/// A paged source of commit records. Page numbers start at 1.
pub trait CommitSource {
    fn fetch_page(
        &self,
        repo: &RepoId,
        page: u32,
        per_page: u32,
        token: Option<&str>,
    ) -> Result<Vec<CommitRecord>>;
}

pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| GhPulseError::Transport(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: settings.api_url.clone(),
        })
    }

    fn commits_endpoint(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            self.base_url.trim_end_matches('/'),
            repo.owner,
            repo.repo
        )
    }
}

impl CommitSource for GitHubClient {
    fn fetch_page(
        &self,
        repo: &RepoId,
        page: u32,
        per_page: u32,
        token: Option<&str>,
    ) -> Result<Vec<CommitRecord>> {
        let mut request = self
            .http
            .get(self.commits_endpoint(repo))
            .query(&[("per_page", per_page), ("page", page)])
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, auth_header(token));
        }

        let response = request
            .send()
            .map_err(|err| GhPulseError::Transport(format!("failed to call GitHub: {err}")))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(rate_limit_error(response.headers(), token.is_some()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(GhPulseError::Transport(format!(
                "GitHub responded with {status}: {}",
                body.trim()
            )));
        }

        response
            .json::<Vec<CommitRecord>>()
            .map_err(|err| GhPulseError::Transport(format!("failed to parse GitHub response: {err}")))
    }
}

pub(crate) fn auth_header(token: &str) -> String {
    format!("token {token}")
}

pub(crate) fn rate_limit_error(headers: &HeaderMap, authenticated: bool) -> GhPulseError {
    let mut message = if authenticated {
        "the supplied token was rejected or its quota is exhausted".to_string()
    } else {
        "unauthenticated requests are limited to 60 per hour; please add a GitHub personal access token"
            .to_string()
    };

    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    if let Some(remaining) = header("x-ratelimit-remaining") {
        message.push_str(&format!(" (remaining: {remaining}"));
        match header("x-ratelimit-reset") {
            Some(reset) => message.push_str(&format!(", resets at epoch {reset})")),
            None => message.push(')'),
        }
    }

    GhPulseError::RateLimitExceeded(message)
}
