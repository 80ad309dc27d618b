use super::open_session;
use crate::analysis::WeekdayOrder;
use crate::cli::CommonArgs;
use crate::output::{output_json, output_report};
use crate::session::AnalysisRequest;
use anyhow::Context;

pub fn exec(common: &CommonArgs, repo: String, json: bool, weekday_order: WeekdayOrder) -> anyhow::Result<()> {
    // Progress goes to stderr, but keep it off for JSON so piped output stays clean.
    let (settings, mut session) = open_session(common, !json && !common.quiet)?;

    let request = AnalysisRequest::new(repo, settings.token).with_weekday_order(weekday_order);
    let report = session
        .analyze(&request)
        .with_context(|| format!("Failed to analyze {}", request.repository))?;

    if json {
        output_json(&report)?;
    } else {
        output_report(&report)?;
    }

    Ok(())
}
