//! Default (and only) command: search and print to stdout.

use anyhow::Result;
use vaxfind_core::config::VaxfindConfig;
use vaxfind_core::search::{self, SearchParams};

pub fn run_search_stdout(cfg: &VaxfindConfig, params: &SearchParams) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let n = search::run_search(cfg, params, &mut out)?;
    tracing::debug!("printed {} result(s)", n);
    Ok(())
}
