use super::open_session;
use crate::analysis::WeekdayOrder;
use crate::cli::CommonArgs;
use crate::session::AnalysisRequest;
use anyhow::Context;

pub fn exec(common: &CommonArgs, repo: String, weekday_order: WeekdayOrder) -> anyhow::Result<()> {
    let (settings, mut session) = open_session(common, !common.quiet)?;

    let request = AnalysisRequest::new(repo, settings.token).with_weekday_order(weekday_order);
    let report = session
        .analyze(&request)
        .with_context(|| format!("Failed to analyze {}", request.repository))?;

    // Refreshes happen inside the alternate screen; a spinner there would tear it.
    session.set_progress(false);
    crate::tui::run(&mut session, request, report).context("Terminal dashboard failed")?;
    Ok(())
}
