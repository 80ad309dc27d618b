pub mod analyze;
pub mod dashboard;
pub mod export;

use crate::cli::CommonArgs;
use crate::config::Settings;
use crate::github::GitHubClient;
use crate::session::Session;
use anyhow::Context;

pub(crate) fn open_session(common: &CommonArgs, show_progress: bool) -> anyhow::Result<(Settings, Session<GitHubClient>)> {
    let settings = Settings::from_common(common);
    tracing::debug!(?settings, "resolved settings");
    let client = GitHubClient::new(&settings).context("Failed to initialize GitHub client")?;
    Ok((settings, Session::new(client).with_progress(show_progress)))
}
