//! One search run: build request → fetch → decode → filter → report.

use anyhow::{Context, Result};
use std::io::Write;

use crate::calendar::{CalendarQuery, CalendarRequest};
use crate::config::VaxfindConfig;
use crate::eligibility::{eligible_sessions, Eligibility};
use crate::fetch;
use crate::model::CenterResult;
use crate::report;

/// Everything a single search needs from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub district_id: i64,
    /// `DD-MM-YYYY`.
    pub date: String,
    pub vaccine: String,
    pub age: i64,
}

impl SearchParams {
    pub fn query(&self) -> CalendarQuery {
        CalendarQuery {
            district_id: self.district_id,
            date: self.date.clone(),
        }
    }

    pub fn eligibility(&self) -> Eligibility {
        Eligibility::new(self.vaccine.clone(), self.age)
    }
}

/// Fetch the district calendar and return the eligible sessions.
///
/// Fetch errors are returned without added context so their text reaches
/// the user unchanged.
pub fn find_sessions(cfg: &VaxfindConfig, params: &SearchParams) -> Result<Vec<CenterResult>> {
    tracing::info!(
        district_id = params.district_id,
        date = %params.date,
        vaccine = %params.vaccine,
        age = params.age,
        "searching sessions"
    );
    let request = CalendarRequest::build(&cfg.base_url, &cfg.user_agent, &params.query())
        .with_context(|| format!("invalid base_url {:?}", cfg.base_url))?;
    let centers = fetch::fetch_centers(&request)?;
    let results = eligible_sessions(&centers, &params.eligibility());
    tracing::info!(
        centers = centers.len(),
        matches = results.len(),
        "search finished"
    );
    Ok(results)
}

/// [`find_sessions`], then write the report to `out`. Returns the number of results.
///
/// Nothing is written unless the fetch and decode both succeed.
pub fn run_search<W: Write>(cfg: &VaxfindConfig, params: &SearchParams, out: &mut W) -> Result<usize> {
    let results = find_sessions(cfg, params)?;
    report::write_results(out, &results).context("write report")?;
    Ok(results.len())
}
