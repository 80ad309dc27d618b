use super::open_session;
use crate::cli::CommonArgs;
use crate::output::{output_export_json, output_export_ndjson, output_export_summary};
use crate::session::AnalysisRequest;
use anyhow::Context;

pub fn exec(common: &CommonArgs, repo: String, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let (settings, mut session) = open_session(common, !(json || ndjson) && !common.quiet)?;

    let request = AnalysisRequest::new(repo, settings.token);
    let export = session
        .export(&request)
        .with_context(|| format!("Failed to export commits for {}", request.repository))?;

    if json {
        output_export_json(&export)?;
    } else if ndjson {
        output_export_ndjson(&export)?;
    } else {
        output_export_summary(&export)?;
    }

    Ok(())
}
