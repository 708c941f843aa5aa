//! CLI for vaxfind.

mod search;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use vaxfind_core::config::{self, VaxfindConfig};
use vaxfind_core::search::SearchParams;

pub use search::run_search_stdout;

/// Find CoWIN vaccination sessions for a district and date.
#[derive(Debug, Parser)]
#[command(name = "vaxfind")]
#[command(
    about = "Find vaccination sessions by district, date, vaccine and age",
    long_about = "Find vaccination sessions by district, date, vaccine and age.\n\n\
                  Single-dash spellings (-age 18, -type=COVAXIN) are accepted as well."
)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Age of the vaccine recipient [default: 18].
    #[arg(long, value_name = "YEARS")]
    pub age: Option<i64>,

    /// Date to search, DD-MM-YYYY [default: today].
    #[arg(long, value_name = "DD-MM-YYYY")]
    pub date: Option<String>,

    /// District identifier [default: 1].
    #[arg(long, value_name = "ID")]
    pub district: Option<i64>,

    /// Vaccine type, matched exactly (case-sensitive) [default: COVAXIN].
    #[arg(long = "type", value_name = "VACCINE")]
    pub vaccine: Option<String>,

    /// Read configuration from this file instead of ~/.config/vaxfind/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse_from(normalize_single_dash(std::env::args_os()));
        let cfg = resolve_config(cli.config.as_deref(), config::load_or_init)?;
        tracing::debug!("loaded config: {:?}", cfg);

        let params = cli.search_params(&cfg, today);
        run_search_stdout(&cfg, &params)
    }

    /// Fill unset flags from `cfg`; `today` supplies the date when `--date` is absent.
    pub fn search_params(&self, cfg: &VaxfindConfig, today: impl FnOnce() -> String) -> SearchParams {
        SearchParams {
            district_id: self.district.unwrap_or(cfg.default_district),
            date: self.date.clone().unwrap_or_else(today),
            vaccine: self
                .vaccine
                .clone()
                .unwrap_or_else(|| cfg.default_vaccine.clone()),
            age: self.age.unwrap_or(cfg.default_age),
        }
    }
}

/// Long flag names that may also be spelled with one dash.
const LONG_FLAGS: &[&str] = &["age", "date", "district", "type", "config"];

/// Rewrite `-age`, `-type=X`, … to their `--` form; anything else passes through unchanged.
pub fn normalize_single_dash<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let rest = s.strip_prefix('-').filter(|r| !r.starts_with('-'))?;
                let name = rest.split_once('=').map_or(rest, |(n, _)| n);
                LONG_FLAGS.contains(&name).then(|| OsString::from(format!("-{}", s)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// An explicit `--config` must load; the default location is best effort.
pub fn resolve_config(
    explicit: Option<&Path>,
    load_default: impl FnOnce() -> Result<VaxfindConfig>,
) -> Result<VaxfindConfig> {
    match explicit {
        Some(path) => config::load_from(path),
        None => Ok(load_default().unwrap_or_else(|err| {
            tracing::warn!("config unavailable, using built-in defaults: {:#}", err);
            VaxfindConfig::default()
        })),
    }
}

/// Local date in the API's `DD-MM-YYYY` form.
pub fn today() -> String {
    chrono::Local::now().format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests;
