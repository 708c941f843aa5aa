use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Public CoWIN API host.
pub const DEFAULT_BASE_URL: &str = "https://cdn-api.co-vin.in";

/// The API rejects requests without a recognizable browser identity.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:88.0) Gecko/20100101 Firefox/88.0";

/// Global configuration loaded from `~/.config/vaxfind/config.toml`.
///
/// Every key is optional; missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaxfindConfig {
    /// Scheme and host of the appointment API (no trailing path).
    pub base_url: String,
    /// `User-Agent` header sent with the calendar request.
    pub user_agent: String,
    /// Age used when `--age` is not given.
    pub default_age: i64,
    /// District used when `--district` is not given.
    pub default_district: i64,
    /// Vaccine type used when `--type` is not given.
    pub default_vaccine: String,
}

impl Default for VaxfindConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_age: 18,
            default_district: 1,
            default_vaccine: "COVAXIN".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vaxfind").context("locate XDG config dir")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create config dir")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VaxfindConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit location; writes defaults there if the file is missing.
pub fn load_or_init_at(path: &Path) -> Result<VaxfindConfig> {
    if !path.exists() {
        let default_cfg = VaxfindConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("create config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<VaxfindConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: VaxfindConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
